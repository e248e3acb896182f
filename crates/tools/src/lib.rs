//! Command-line adapters around `dungeon_core`: tuning files, scripted input
//! and a plain-text view of each snapshot.

pub mod config;
pub mod render;
pub mod script;

use clap::ValueEnum;
use dungeon_core::ClassKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ClassArg {
    Knight,
    Warrior,
    Thief,
}

impl From<ClassArg> for ClassKind {
    fn from(arg: ClassArg) -> Self {
        match arg {
            ClassArg::Knight => ClassKind::Knight,
            ClassArg::Warrior => ClassKind::Warrior,
            ClassArg::Thief => ClassKind::Thief,
        }
    }
}
