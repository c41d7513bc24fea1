/// The kind of a `##` metadata line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Info,
    Filter,
    Format,
    Alt,
    Contig,
    Sample,
    Pedigree,
    Keypair,
}

/// Structured prefixes, tested in this order. First match wins.
pub const CATEGORY_PREFIXES: [(&str, Category); 7] = [
    ("INFO", Category::Info),
    ("FILTER", Category::Filter),
    ("FORMAT", Category::Format),
    ("ALT", Category::Alt),
    ("contig", Category::Contig),
    ("SAMPLE", Category::Sample),
    ("PEDIGREE", Category::Pedigree),
];

/// Order in which categories become sheets in the workbook.
pub const SHEET_ORDER: [Category; 8] = [
    Category::Keypair,
    Category::Info,
    Category::Filter,
    Category::Format,
    Category::Alt,
    Category::Contig,
    Category::Sample,
    Category::Pedigree,
];

impl Category {
    /// Match a marker-stripped line against the structured prefixes.
    #[must_use]
    pub fn from_prefix(line: &str) -> Option<Self> {
        CATEGORY_PREFIXES
            .iter()
            .find(|(prefix, _)| line.starts_with(prefix))
            .map(|(_, category)| *category)
    }

    /// Fixed column set for this category's table.
    #[must_use]
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Self::Keypair => &["Name", "Value"],
            Self::Info => &["ID", "Number", "Type", "Description", "Source", "Version"],
            Self::Filter | Self::Alt => &["ID", "Description"],
            Self::Format => &["ID", "Number", "Type", "Description"],
            Self::Contig => &["ID", "URL"],
            Self::Sample => &["ID", "Genomes", "Mixture", "Description"],
            Self::Pedigree => &["Name", "Genome"],
        }
    }

    /// Human-readable worksheet name.
    #[must_use]
    pub fn sheet_name(self) -> &'static str {
        match self {
            Self::Keypair => "File Metadata",
            Self::Info => "INFO",
            Self::Filter => "FILTER",
            Self::Format => "FORMAT",
            Self::Alt => "ALT",
            Self::Contig => "contig",
            Self::Sample => "SAMPLE",
            Self::Pedigree => "PEDIGREE",
        }
    }

    /// Whether lines of this category carry a `<...>` attribute list.
    #[must_use]
    pub fn has_attribute_list(self) -> bool {
        !matches!(self, Self::Keypair | Self::Pedigree)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.sheet_name())
    }
}
