//! Pre-built Test Fixtures
//!
//! Consistent departments and sheets for tests across crates.

use core_kernel::RawRow;
use domain_directory::{Department, DepartmentDirectory};

use crate::builders::{AssetRowBuilder, DepartmentRowBuilder};

/// Fixture for department data
pub struct DepartmentFixtures;

impl DepartmentFixtures {
    /// IT department with signatory and receiver
    pub fn it() -> Department {
        Department::new("IT")
            .with_signatory("Директор з ІТ", "Іван Петренко", "Івану Петренку")
            .with_receiver("Комірник", "Ольга Коваль")
    }

    /// Finance department with signatory and receiver
    pub fn finance() -> Department {
        Department::new("FIN")
            .with_signatory("Головний бухгалтер", "Марія Шевчук", "Марії Шевчук")
            .with_receiver("Бухгалтер", "Петро Бондар")
    }

    /// HR department without receiver fields
    pub fn hr_without_receiver() -> Department {
        Department::new("HR").with_signatory("Керівник", "Анна Лис", "Анні Лис")
    }

    /// Directory holding IT, FIN and HR
    pub fn directory() -> DepartmentDirectory {
        vec![Self::it(), Self::finance(), Self::hr_without_receiver()]
            .into_iter()
            .collect()
    }
}

/// Fixture for whole sheets, header row first
pub struct SheetFixtures;

impl SheetFixtures {
    /// Header of the asset sheet in its default layout
    pub fn asset_header() -> RawRow {
        [
            "№", "", "Назва", "Дата", "Інв. номер", "Од.", "К-сть", "", "Сума", "Власники", "Генерувати",
        ]
        .iter()
        .map(|c| c.to_string())
        .collect()
    }

    /// Header of the department sheet in its default layout
    pub fn department_header() -> RawRow {
        [
            "Код", "Статус", "Посада", "ПІБ", "ПІБ (давальний)", "Посада отримувача", "Отримувач",
        ]
        .iter()
        .map(|c| c.to_string())
        .collect()
    }

    /// Department sheet matching [`DepartmentFixtures::directory`]
    pub fn departments() -> Vec<RawRow> {
        vec![
            Self::department_header(),
            DepartmentRowBuilder::new("IT")
                .with_signatory("Директор з ІТ", "Іван Петренко", "Івану Петренку")
                .with_receiver("Комірник", "Ольга Коваль")
                .build(),
            DepartmentRowBuilder::new("FIN")
                .with_signatory("Головний бухгалтер", "Марія Шевчук", "Марії Шевчук")
                .with_receiver("Бухгалтер", "Петро Бондар")
                .build(),
            DepartmentRowBuilder::new("HR")
                .with_signatory("Керівник", "Анна Лис", "Анні Лис")
                .build(),
        ]
    }

    /// A small asset sheet with one row of each kind
    ///
    /// Rows: an explicit split, a rounding case, a skipped flag, a mixed
    /// owner spec and an unknown owner.
    pub fn assets() -> Vec<RawRow> {
        vec![
            Self::asset_header(),
            AssetRowBuilder::new("Стіл").quantity("10").price("100,00").owners("IT-4\nFIN-6").build(),
            AssetRowBuilder::new("Лампа").quantity("3").price("10.00").owners("IT-1, FIN-1, HR-1").build(),
            AssetRowBuilder::new("Шафа").generate(false).build(),
            AssetRowBuilder::new("Крісло").quantity("3").owners("IT-2, FIN").build(),
            AssetRowBuilder::new("Монітор").quantity("4").price("1 000").owners("IT-2, ZZZ-2").build(),
        ]
    }
}
