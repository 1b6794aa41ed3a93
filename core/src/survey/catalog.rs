use crate::processing::filter::LongitudeWindow;
use crate::table::Delimiter;

/// Whether a terminal-velocity survey honours the caller's `bin` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinPolicy {
    /// Bin in 1 degree steps regardless of the request.
    Always,
    /// Bin only when the caller asks for it.
    Caller,
}

/// Column layout of a survey table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnMap {
    /// Surface radius, Kz and Kz uncertainty.
    Kz {
        surfr: usize,
        kz: usize,
        kzerr: usize,
    },
    /// Galactic longitude and terminal velocity.
    TerminalVelocity { glon: usize, vterm: usize },
}

/// Everything needed to read one survey file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurveySpec {
    pub name: &'static str,
    /// Path relative to the data root.
    pub path: &'static str,
    pub delimiter: Delimiter,
    pub comment: u8,
    pub columns: ColumnMap,
    pub window: Option<LongitudeWindow>,
    pub drop_empty_bins: bool,
    pub bin_policy: BinPolicy,
}

pub const BOVY_RIX_13: SurveySpec = SurveySpec {
    name: "bovyrix13",
    path: "mwpot14data/bovyrix13kzdata.csv",
    delimiter: Delimiter::Char(b','),
    comment: b'#',
    columns: ColumnMap::Kz {
        surfr: 2,
        kz: 6,
        kzerr: 7,
    },
    window: None,
    drop_empty_bins: false,
    bin_policy: BinPolicy::Caller,
};

pub const CLEMENS_85: SurveySpec = SurveySpec {
    name: "clemens1985",
    path: "mwpot14data/clemens1985_table2.dat",
    delimiter: Delimiter::Char(b'|'),
    comment: b'#',
    columns: ColumnMap::TerminalVelocity { glon: 0, vterm: 1 },
    window: Some(LongitudeWindow::new(40.0, 80.0)),
    drop_empty_bins: true,
    bin_policy: BinPolicy::Always,
};

pub const MCCLURE_GRIFFITHS_07: SurveySpec = SurveySpec {
    name: "mcclure-griffiths2007",
    path: "mwpot14data/McClureGriffiths2007.dat",
    delimiter: Delimiter::Whitespace,
    comment: b'#',
    columns: ColumnMap::TerminalVelocity { glon: 0, vterm: 1 },
    window: Some(LongitudeWindow::new(280.0, 320.0)),
    drop_empty_bins: false,
    bin_policy: BinPolicy::Caller,
};

pub const MCCLURE_GRIFFITHS_16: SurveySpec = SurveySpec {
    name: "mcclure-griffiths2016",
    path: "mwpot14data/McClureGriffiths2016.dat",
    delimiter: Delimiter::Char(b'&'),
    comment: b'#',
    columns: ColumnMap::TerminalVelocity { glon: 0, vterm: 1 },
    window: Some(LongitudeWindow::new(40.0, 80.0)),
    drop_empty_bins: false,
    bin_policy: BinPolicy::Caller,
};

pub static SURVEYS: [SurveySpec; 4] = [
    BOVY_RIX_13,
    CLEMENS_85,
    MCCLURE_GRIFFITHS_07,
    MCCLURE_GRIFFITHS_16,
];

impl SurveySpec {
    pub fn bins(&self, requested: bool) -> bool {
        match self.bin_policy {
            BinPolicy::Always => true,
            BinPolicy::Caller => requested,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_names_are_unique() {
        for (i, a) in SURVEYS.iter().enumerate() {
            for b in &SURVEYS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn clemens_ignores_bin_request() {
        assert!(CLEMENS_85.bins(false));
        assert!(!MCCLURE_GRIFFITHS_16.bins(false));
        assert!(MCCLURE_GRIFFITHS_07.bins(true));
    }
}
