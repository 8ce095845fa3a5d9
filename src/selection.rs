use crate::data::{City, YEARS};

/// Current selector values. Every transition returns a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub city: City,
    pub year: u16,
    pub compare: City,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            city: City::Fortaleza,
            year: 2023,
            compare: City::SaoPaulo,
        }
    }
}

fn step_year(year: u16, forward: bool) -> u16 {
    let pos = YEARS.iter().position(|&y| y == year).unwrap_or(0);
    let next = if forward {
        (pos + 1) % YEARS.len()
    } else {
        (pos + YEARS.len() - 1) % YEARS.len()
    };
    YEARS[next]
}

impl Selection {
    pub fn next_city(self) -> Self {
        Self { city: self.city.next(), ..self }
    }

    pub fn prev_city(self) -> Self {
        Self { city: self.city.prev(), ..self }
    }

    pub fn next_year(self) -> Self {
        Self { year: step_year(self.year, true), ..self }
    }

    pub fn prev_year(self) -> Self {
        Self { year: step_year(self.year, false), ..self }
    }

    pub fn next_compare(self) -> Self {
        Self { compare: self.compare.next(), ..self }
    }

    pub fn prev_compare(self) -> Self {
        Self { compare: self.compare.prev(), ..self }
    }
}

/// Which selector Left/Right acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    City,
    Year,
    Compare,
}

impl Focus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::City => "Município",
            Self::Year => "Ano",
            Self::Compare => "Comparar com",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::City => Self::Year,
            Self::Year => Self::Compare,
            Self::Compare => Self::City,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::City => Self::Compare,
            Self::Year => Self::City,
            Self::Compare => Self::Year,
        }
    }

    /// Step the focused selector of `sel`
    pub fn step(&self, sel: Selection, forward: bool) -> Selection {
        match (self, forward) {
            (Self::City, true) => sel.next_city(),
            (Self::City, false) => sel.prev_city(),
            (Self::Year, true) => sel.next_year(),
            (Self::Year, false) => sel.prev_year(),
            (Self::Compare, true) => sel.next_compare(),
            (Self::Compare, false) => sel.prev_compare(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_wraps() {
        let sel = Selection { year: 2024, ..Selection::default() };
        assert_eq!(sel.next_year().year, 2022);
        assert_eq!(sel.next_year().prev_year().year, 2024);
    }

    #[test]
    fn test_transitions_touch_one_field() {
        let sel = Selection::default();
        let moved = sel.next_city();
        assert_eq!(moved.city, City::SaoPaulo);
        assert_eq!(moved.year, sel.year);
        assert_eq!(moved.compare, sel.compare);

        let moved = sel.prev_compare();
        assert_eq!(moved.compare, City::Fortaleza);
        assert_eq!(moved.city, sel.city);
    }

    #[test]
    fn test_focus_cycle() {
        assert_eq!(Focus::City.next().next().next(), Focus::City);
        assert_eq!(Focus::City.prev(), Focus::Compare);
        let sel = Focus::Year.step(Selection::default(), false);
        assert_eq!(sel.year, 2022);
    }
}
