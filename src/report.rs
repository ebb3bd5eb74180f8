use std::fmt::Display;

use crate::{Map, Visits};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    visits: Visits,
    unvisited_n: usize,
    delimiter: char,
}

impl Report {
    pub fn new(map: &Map, visits: Visits, delimiter: char) -> Self {
        // Path cells are never blocked, so this can't underflow.
        let unvisited_n = map.cell_n() - map.blocked_n() - visits.path_len();
        Self {
            visits,
            unvisited_n,
            delimiter,
        }
    }

    pub fn visited_n(&self) -> usize {
        self.visits.path_len()
    }

    pub fn unvisited_n(&self) -> usize {
        self.unvisited_n
    }

    pub fn visits(&self) -> &Visits {
        &self.visits
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "The robot visited {} squares moving from A to B inclusive.",
            self.visited_n()
        )?;
        writeln!(
            f,
            "The robot did not visit {} unblocked squares.",
            self.unvisited_n
        )?;
        writeln!(f, "The robot visited each square this many times: ")?;
        writeln!(f, "{}", self.visits.render(self.delimiter))
    }
}
