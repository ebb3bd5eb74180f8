use std::fmt::Display;

use crate::{
    grid::{Direction, Map, Position, Symbol},
    Error,
};

/// Back-references left by a successful search: every reached cell except the
/// start holds the position it was first reached from.
#[derive(Debug, Clone)]
pub struct Trail {
    from: Vec<Option<Position>>,
    side_len: usize,
    start_pos: Position,
    end_pos: Position,
}

impl Map {
    /// Breadth-first search level by level from the start, stopping as soon as
    /// the destination is discovered.
    pub fn search(&self) -> Option<Trail> {
        let start_pos = self.start_pos();
        let mut from = vec![None; self.cell_n()];
        let mut cur_frontier = vec![start_pos];
        let mut level_n = 0;
        while !cur_frontier.is_empty() {
            level_n += 1;
            let mut next_frontier = Vec::new();
            for cur_pos in &cur_frontier {
                for next_pos in Direction::all_dirs()
                    .iter()
                    .flat_map(|dir| cur_pos.neighbor(*dir))
                {
                    let (Some(symbol), Some(ind)) =
                        (self.symbol(&next_pos), self.pos_to_ind(&next_pos))
                    else {
                        continue;
                    };

                    match symbol {
                        Symbol::End => {
                            from[ind] = Some(*cur_pos);
                            log::debug!(
                                "Reached destination after {} level(s).",
                                level_n
                            );
                            return Some(Trail {
                                from,
                                side_len: self.side_len(),
                                start_pos,
                                end_pos: next_pos,
                            });
                        }
                        Symbol::Empty if from[ind].is_none() => {
                            from[ind] = Some(*cur_pos);
                            next_frontier.push(next_pos);
                        }
                        _ => (),
                    }
                }
            }
            log::trace!(
                "Level {} expanded {} cell(s), {} queued.",
                level_n,
                cur_frontier.len(),
                next_frontier.len()
            );
            cur_frontier = next_frontier;
        }

        log::debug!("Search exhausted after {} level(s).", level_n);
        None
    }
}

impl Trail {
    /// Builds a trail from raw back-references, laid out row-major.
    pub fn new(
        from: Vec<Option<Position>>,
        side_len: usize,
        start_pos: Position,
        end_pos: Position,
    ) -> Self {
        Self {
            from,
            side_len,
            start_pos,
            end_pos,
        }
    }

    pub fn came_from(&self, pos: &Position) -> Option<Position> {
        self.pos_to_ind(pos)
            .and_then(|ind| self.from.get(ind))
            .copied()
            .flatten()
    }

    /// Walks the back-references from the destination to the start.
    pub fn reconstruct(&self) -> Result<Visits, Error> {
        let mut counts = vec![0; self.side_len * self.side_len];
        let mut cur_pos = self.end_pos;
        let Some(end_ind) = self.pos_to_ind(&cur_pos) else {
            return Err(Error::CorruptPathState(cur_pos));
        };
        counts[end_ind] = 1;
        let mut path = vec![cur_pos];
        while cur_pos != self.start_pos {
            if path.len() > counts.len() {
                return Err(Error::CorruptPathState(cur_pos));
            }

            let Some(next_pos) = self.came_from(&cur_pos) else {
                return Err(Error::CorruptPathState(cur_pos));
            };
            if let Some(ind) = self.pos_to_ind(&next_pos) {
                counts[ind] = 1;
            }
            path.push(next_pos);
            cur_pos = next_pos;
        }
        path.reverse();
        log::debug!(
            "Path from {} to {} has {} cell(s).",
            self.start_pos,
            self.end_pos,
            path.len()
        );

        Ok(Visits {
            counts,
            side_len: self.side_len,
            path,
        })
    }

    fn pos_to_ind(&self, pos: &Position) -> Option<usize> {
        if pos.r() < self.side_len && pos.c() < self.side_len {
            Some(pos.r() * self.side_len + pos.c())
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visits {
    counts: Vec<usize>,
    side_len: usize,
    path: Vec<Position>,
}

impl Visits {
    /// Cells on the path, both ends included.
    pub fn path_len(&self) -> usize {
        self.path.len()
    }

    pub fn path(&self) -> &[Position] {
        &self.path
    }

    pub fn count(&self, pos: &Position) -> Option<usize> {
        if pos.r() < self.side_len && pos.c() < self.side_len {
            self.counts.get(pos.r() * self.side_len + pos.c()).copied()
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[usize]> {
        self.counts.chunks(self.side_len)
    }

    pub fn render(&self, delimiter: char) -> String {
        let delimiter = delimiter.to_string();
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|count| count.to_string())
                    .collect::<Vec<_>>()
                    .join(delimiter.as_str())
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Display for Visits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(crate::DEFAULT_DELIMITER))
    }
}
