//! Name generation for gladiators.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::rng::RandomSource;

/// Produces display names for newly created gladiators.
///
/// Implementations may ignore `rng`; the built-in tables draw from it so a
/// seeded battle also reproduces its names.
pub trait NameSource: Send + Sync {
    fn next_name(&self, rng: &mut dyn RandomSource) -> String;
}

const PRAENOMINA: &[&str] = &[
    "Aulus", "Decimus", "Gaius", "Gnaeus", "Lucius", "Marcus", "Numerius", "Publius", "Quintus",
    "Servius", "Sextus", "Spurius", "Tiberius", "Titus", "Appius", "Manius",
];

const NOMINA: &[&str] = &[
    "Aemilius", "Antonius", "Aurelius", "Caecilius", "Claudius", "Cornelius", "Domitius",
    "Fabius", "Flavius", "Julius", "Junius", "Licinius", "Octavius", "Pompeius", "Sempronius",
    "Valerius",
];

/// Two-part Roman names drawn from built-in tables.
#[derive(Clone, Copy, Debug, Default)]
pub struct LatinNames;

impl NameSource for LatinNames {
    fn next_name(&self, rng: &mut dyn RandomSource) -> String {
        let first = pick(PRAENOMINA, rng);
        let last = pick(NOMINA, rng);
        format!("{first} {last}")
    }
}

fn pick(table: &'static [&'static str], rng: &mut dyn RandomSource) -> &'static str {
    let index = rng.random_int(0, table.len() as i32 - 1) as usize;
    table[index]
}

/// Fixed list of names handed out in order, then numbered once exhausted.
#[derive(Debug)]
pub struct FixedNames {
    names: Vec<String>,
    cursor: AtomicUsize,
}

impl FixedNames {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            cursor: AtomicUsize::new(0),
        }
    }
}

impl NameSource for FixedNames {
    fn next_name(&self, _rng: &mut dyn RandomSource) -> String {
        let index = self.cursor.fetch_add(1, Ordering::Relaxed);
        match self.names.get(index) {
            Some(name) => name.clone(),
            None => format!("Gladiator {}", index + 1),
        }
    }
}
