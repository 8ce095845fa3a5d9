use std::collections::BTreeMap;
use std::str::FromStr;

/// Years offered by the year selector
pub const YEARS: [u16; 3] = [2022, 2023, 2024];

/// Cities offered by the city selectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum City {
    Fortaleza,
    SaoPaulo,
    Salvador,
    BeloHorizonte,
}

impl City {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fortaleza => "Fortaleza",
            Self::SaoPaulo => "São Paulo",
            Self::Salvador => "Salvador",
            Self::BeloHorizonte => "Belo Horizonte",
        }
    }

    /// Code used for chart bar labels
    pub fn code(&self) -> &'static str {
        match self {
            Self::Fortaleza => "FOR",
            Self::SaoPaulo => "SAO",
            Self::Salvador => "SSA",
            Self::BeloHorizonte => "BHZ",
        }
    }

    pub fn all() -> &'static [City] {
        &[City::Fortaleza, City::SaoPaulo, City::Salvador, City::BeloHorizonte]
    }

    fn position(&self) -> usize {
        Self::all().iter().position(|c| c == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        let all = Self::all();
        all[(self.position() + 1) % all.len()]
    }

    pub fn prev(&self) -> Self {
        let all = Self::all();
        all[(self.position() + all.len() - 1) % all.len()]
    }
}

/// Lowercase, strip Portuguese accents and treat `-`/`_` as spaces
pub(crate) fn fold(s: &str) -> String {
    s.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' => 'a',
            'é' | 'ê' => 'e',
            'í' => 'i',
            'ó' | 'ô' | 'õ' => 'o',
            'ú' => 'u',
            'ç' => 'c',
            '-' | '_' => ' ',
            other => other,
        })
        .collect()
}

impl FromStr for City {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = fold(s);
        Self::all()
            .iter()
            .copied()
            .find(|c| fold(c.name()) == wanted)
            .ok_or_else(|| {
                let valid: Vec<_> = Self::all().iter().map(|c| c.name()).collect();
                format!("unknown city '{}' (expected one of: {})", s, valid.join(", "))
            })
    }
}

/// Stored figures for one (location, period). Both fields are always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Funding {
    pub enrollment_count: u64,
    pub amount_received: u64,
}

/// Result of a lookup; `None` fields mean "N/D"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    pub location: String,
    pub period: u16,
    pub enrollment_count: Option<u64>,
    pub amount_received: Option<u64>,
}

impl DisplayRecord {
    pub fn is_available(&self) -> bool {
        self.enrollment_count.is_some() && self.amount_received.is_some()
    }
}

/// Demonstration lookup table, keyed by (location, period)
#[derive(Debug)]
pub struct DataStore {
    rows: BTreeMap<(String, u16), Funding>,
}

/// Fictitious figures shown by the dashboard. The 2023 rows are the
/// prototype's demonstration values; the 2022 and 2024 rows exist only to
/// give the Evolução Temporal chart a series. Salvador/2022 and
/// Belo Horizonte/2024 are left out so N/D is reachable from the selectors.
const DEMO_ROWS: [(&str, u16, u64, u64); 10] = [
    ("Fortaleza", 2022, 342_000, 2_180_000_000),
    ("Fortaleza", 2023, 350_000, 2_450_000_000),
    ("Fortaleza", 2024, 356_000, 2_690_000_000),
    ("São Paulo", 2022, 1_185_000, 8_900_000_000),
    ("São Paulo", 2023, 1_200_000, 9_800_000_000),
    ("São Paulo", 2024, 1_214_000, 10_450_000_000),
    ("Salvador", 2023, 420_000, 2_950_000_000),
    ("Salvador", 2024, 415_000, 3_120_000_000),
    ("Belo Horizonte", 2022, 305_000, 1_920_000_000),
    ("Belo Horizonte", 2023, 310_000, 2_100_000_000),
];

impl DataStore {
    pub fn demo() -> Self {
        let rows = DEMO_ROWS
            .iter()
            .map(|&(location, period, enrollment_count, amount_received)| {
                (
                    (location.to_string(), period),
                    Funding { enrollment_count, amount_received },
                )
            })
            .collect();
        Self { rows }
    }

    pub fn get(&self, location: &str, period: u16) -> Option<&Funding> {
        self.rows.get(&(location.to_string(), period))
    }

    /// Look up a (location, period). Absent keys yield "N/D" for both fields.
    pub fn lookup(&self, location: &str, period: u16) -> DisplayRecord {
        let found = self.get(location, period);
        if found.is_none() {
            tracing::debug!(location, period, "no demo row, using N/D");
        }
        DisplayRecord {
            location: location.to_string(),
            period,
            enrollment_count: found.map(|f| f.enrollment_count),
            amount_received: found.map(|f| f.amount_received),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Stored rows for one year, in selector order
    pub fn rows_for_year(&self, year: u16) -> Vec<(City, Funding)> {
        City::all()
            .iter()
            .filter_map(|&city| self.get(city.name(), year).map(|f| (city, *f)))
            .collect()
    }

    /// Stored rows for one city, in year order. Missing years are skipped.
    pub fn series_for_city(&self, city: City) -> Vec<(u16, Funding)> {
        YEARS
            .iter()
            .filter_map(|&year| self.get(city.name(), year).map(|f| (year, *f)))
            .collect()
    }

    /// Cities with data for `year`, highest amount received first
    pub fn ranking(&self, year: u16) -> Vec<(City, Funding)> {
        let mut rows = self.rows_for_year(year);
        rows.sort_by(|a, b| b.1.amount_received.cmp(&a.1.amount_received));
        rows
    }

    pub fn max_amount(&self) -> u64 {
        self.rows.values().map(|f| f.amount_received).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_present_rows() {
        let store = DataStore::demo();
        for &(location, period, enrollment, amount) in DEMO_ROWS.iter() {
            let record = store.lookup(location, period);
            assert_eq!(record.enrollment_count, Some(enrollment));
            assert_eq!(record.amount_received, Some(amount));
            assert!(record.is_available());
        }
    }

    #[test]
    fn test_lookup_sao_paulo_2023() {
        let record = DataStore::demo().lookup("São Paulo", 2023);
        assert_eq!(record.location, "São Paulo");
        assert_eq!(record.period, 2023);
        assert_eq!(record.enrollment_count, Some(1_200_000));
        assert_eq!(record.amount_received, Some(9_800_000_000));
    }

    #[test]
    fn test_lookup_absent_is_not_available() {
        let store = DataStore::demo();
        for (location, period) in [("Recife", 2023), ("Salvador", 2022), ("Belo Horizonte", 2024), ("Fortaleza", 1999)] {
            let record = store.lookup(location, period);
            assert_eq!(record.enrollment_count, None);
            assert_eq!(record.amount_received, None);
            assert!(!record.is_available());
        }
    }

    #[test]
    fn test_every_selector_combination_resolves() {
        let store = DataStore::demo();
        let mut missing = 0;
        for city in City::all() {
            for &year in YEARS.iter() {
                if !store.lookup(city.name(), year).is_available() {
                    missing += 1;
                }
            }
        }
        assert_eq!(missing, City::all().len() * YEARS.len() - store.len());
    }

    #[test]
    fn test_len_and_is_empty() {
        let store = DataStore::demo();
        assert_eq!(store.len(), DEMO_ROWS.len());
        assert!(!store.is_empty());
        assert!(DataStore { rows: BTreeMap::new() }.is_empty());
    }

    #[test]
    fn test_prototype_2023_rows() {
        let store = DataStore::demo();
        let expected = [
            ("Fortaleza", 350_000, 2_450_000_000),
            ("São Paulo", 1_200_000, 9_800_000_000),
            ("Salvador", 420_000, 2_950_000_000),
            ("Belo Horizonte", 310_000, 2_100_000_000),
        ];
        for (location, enrollment, amount) in expected {
            assert_eq!(
                store.get(location, 2023),
                Some(&Funding { enrollment_count: enrollment, amount_received: amount })
            );
        }
        assert_eq!(store.rows_for_year(2023).len(), expected.len());
    }

    #[test]
    fn test_ranking_orders_by_amount() {
        let ranking: Vec<City> = DataStore::demo().ranking(2023).into_iter().map(|(c, _)| c).collect();
        assert_eq!(
            ranking,
            vec![City::SaoPaulo, City::Salvador, City::Fortaleza, City::BeloHorizonte]
        );
    }

    #[test]
    fn test_series_skips_missing_years() {
        let years: Vec<u16> = DataStore::demo()
            .series_for_city(City::Salvador)
            .into_iter()
            .map(|(y, _)| y)
            .collect();
        assert_eq!(years, vec![2023, 2024]);
    }

    #[test]
    fn test_city_parse() {
        assert_eq!("São Paulo".parse::<City>(), Ok(City::SaoPaulo));
        assert_eq!("sao-paulo".parse::<City>(), Ok(City::SaoPaulo));
        assert_eq!("BELO_HORIZONTE".parse::<City>(), Ok(City::BeloHorizonte));
        assert!("Recife".parse::<City>().is_err());
    }

    #[test]
    fn test_city_cycle_wraps() {
        assert_eq!(City::BeloHorizonte.next(), City::Fortaleza);
        assert_eq!(City::Fortaleza.prev(), City::BeloHorizonte);
        assert_eq!(City::SaoPaulo.next().prev(), City::SaoPaulo);
    }
}
