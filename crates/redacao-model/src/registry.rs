//! Fixed code-to-label registries from the INEP microdata dictionary.
//!
//! Labels are the Portuguese descriptions published with the ENEM
//! microdata. Lookups are total: a code outside the registry renders
//! as its numeral instead of failing, so one undocumented code in the
//! data never aborts an aggregation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Essay grading status (`TP_STATUS_REDACAO`).
///
/// Code 5 does not appear in the published dictionary; it falls
/// through to the numeral fallback like any other unknown code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum EssayStatus {
    /// 1 - graded normally.
    Graded,
    /// 2 - annulled (drawings, offensive content, identification marks).
    Annulled,
    /// 3 - copy of the motivating texts.
    MotivatorCopy,
    /// 4 - blank answer sheet.
    Blank,
    /// 6 - completely off topic.
    OffTopic,
    /// 7 - wrong text type (not argumentative essay).
    WrongTextType,
    /// 8 - fewer than 8 written lines.
    TooShort,
    /// 9 - contains a part disconnected from the theme.
    DisconnectedPart,
}

impl EssayStatus {
    pub const ALL: [EssayStatus; 8] = [
        EssayStatus::Graded,
        EssayStatus::Annulled,
        EssayStatus::MotivatorCopy,
        EssayStatus::Blank,
        EssayStatus::OffTopic,
        EssayStatus::WrongTextType,
        EssayStatus::TooShort,
        EssayStatus::DisconnectedPart,
    ];

    pub fn code(&self) -> i64 {
        match self {
            EssayStatus::Graded => 1,
            EssayStatus::Annulled => 2,
            EssayStatus::MotivatorCopy => 3,
            EssayStatus::Blank => 4,
            EssayStatus::OffTopic => 6,
            EssayStatus::WrongTextType => 7,
            EssayStatus::TooShort => 8,
            EssayStatus::DisconnectedPart => 9,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.iter().copied().find(|status| status.code() == code)
    }

    /// Dictionary label as published by INEP.
    pub fn label(&self) -> &'static str {
        match self {
            EssayStatus::Graded => "Sem problemas",
            EssayStatus::Annulled => "Anulada",
            EssayStatus::MotivatorCopy => "Cópia Texto Motivador",
            EssayStatus::Blank => "Em Branco",
            EssayStatus::OffTopic => "Fuga ao tema",
            EssayStatus::WrongTextType => "Não atendimento ao tipo textual",
            EssayStatus::TooShort => "Texto insuficiente",
            EssayStatus::DisconnectedPart => "Parte desconectada",
        }
    }
}

impl fmt::Display for EssayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// School administration type (`TP_DEPENDENCIA_ADM_ESC`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SchoolAdminType {
    /// 1 - federal.
    Federal,
    /// 2 - state.
    State,
    /// 3 - municipal.
    Municipal,
    /// 4 - private.
    Private,
}

impl SchoolAdminType {
    pub const ALL: [SchoolAdminType; 4] = [
        SchoolAdminType::Federal,
        SchoolAdminType::State,
        SchoolAdminType::Municipal,
        SchoolAdminType::Private,
    ];

    pub fn code(&self) -> i64 {
        match self {
            SchoolAdminType::Federal => 1,
            SchoolAdminType::State => 2,
            SchoolAdminType::Municipal => 3,
            SchoolAdminType::Private => 4,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.iter().copied().find(|admin| admin.code() == code)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SchoolAdminType::Federal => "Federal",
            SchoolAdminType::State => "Estadual",
            SchoolAdminType::Municipal => "Municipal",
            SchoolAdminType::Private => "Privada",
        }
    }
}

impl fmt::Display for SchoolAdminType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Which registry a coded value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryKind {
    Status,
    AdminType,
}

/// Total label lookup: the registered label, or the numeral when the
/// code is not in the registry.
pub fn label_of(kind: CategoryKind, code: i64) -> String {
    let known = match kind {
        CategoryKind::Status => EssayStatus::from_code(code).map(|status| status.label()),
        CategoryKind::AdminType => SchoolAdminType::from_code(code).map(|admin| admin.label()),
    };
    match known {
        Some(label) => label.to_string(),
        None => code.to_string(),
    }
}
