//! Display attributes.  The simulation never reads these; renderers do.

use rat_core::SimRng;

const SYLLABLES: [&str; 10] = ["pa", "ma", "ra", "ta", "ka", "sa", "la", "va", "na", "ba"];

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Fill colour used by the canvas renderer.
    pub fn color(self) -> &'static str {
        match self {
            Sex::Male   => "#69f",
            Sex::Female => "#f99",
        }
    }
}

/// Opaque-to-the-core label a renderer draws a rat with.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayTag {
    pub name: String,
    pub sex:  Sex,
}

impl DisplayTag {
    pub fn new(name: impl Into<String>, sex: Sex) -> Self {
        Self { name: name.into(), sex }
    }

    /// A name of 2–5 random syllables and a coin-flip sex.
    pub fn random(rng: &mut SimRng) -> Self {
        let syllables = rng.gen_range(2..=5);
        let mut name = String::with_capacity(syllables * 2);
        for _ in 0..syllables {
            if let Some(s) = rng.choose(&SYLLABLES) {
                name.push_str(s);
            }
        }
        let sex = if rng.gen_bool(0.5) { Sex::Male } else { Sex::Female };
        Self { name, sex }
    }

    #[inline]
    pub fn color(&self) -> &'static str {
        self.sex.color()
    }
}
