use std::fmt::Display;

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    r: usize,
    c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    pub fn r(&self) -> usize {
        self.r
    }

    pub fn c(&self) -> usize {
        self.c
    }

    pub fn neighbor(&self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::South => Some(Self::new(self.r + 1, self.c)),
            Direction::North if self.r > 0 => Some(Self::new(self.r - 1, self.c)),
            Direction::East => Some(Self::new(self.r, self.c + 1)),
            Direction::West if self.c > 0 => Some(Self::new(self.r, self.c - 1)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    South,
    North,
    East,
    West,
}

impl Direction {
    /// Directions in the order neighbors are searched, which decides the
    /// recorded path when several shortest ones exist.
    pub fn all_dirs() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::South,
            Direction::North,
            Direction::East,
            Direction::West,
        ];

        &ALL_DIRECTIONS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Start,
    End,
    Blocked,
    Empty,
}

impl Symbol {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "A" => Some(Symbol::Start),
            "B" => Some(Symbol::End),
            "X" => Some(Symbol::Blocked),
            "0" => Some(Symbol::Empty),
            _ => None,
        }
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let c = match self {
            Symbol::Start => 'A',
            Symbol::End => 'B',
            Symbol::Blocked => 'X',
            Symbol::Empty => '0',
        };

        write!(f, "{}", c)
    }
}

/// Square grid of raw cell tokens, not interpreted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenGrid {
    tokens: Vec<String>,
    side_len: usize,
}

impl TokenGrid {
    pub fn parse(text: &str, delimiter: char) -> Result<Self, Error> {
        let rows = text
            .lines()
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>();
        let side_len = rows.len();
        if side_len == 0 {
            return Err(Error::MalformedGrid(delimiter));
        }

        let mut tokens = Vec::with_capacity(side_len * side_len);
        for row in rows {
            let row_start = tokens.len();
            tokens.extend(row.split(delimiter).map(str::to_string));
            let this_col_n = tokens.len() - row_start;
            if this_col_n != side_len {
                log::debug!(
                    "Expect {} column(s) in row {}, given {}.",
                    side_len,
                    row_start / side_len,
                    this_col_n
                );
                return Err(Error::MalformedGrid(delimiter));
            }
        }

        Ok(Self { tokens, side_len })
    }

    pub fn side_len(&self) -> usize {
        self.side_len
    }

    pub fn token(&self, pos: &Position) -> Option<&str> {
        if pos.r < self.side_len && pos.c < self.side_len {
            self.tokens
                .get(pos.r * self.side_len + pos.c)
                .map(String::as_str)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    symbols: Vec<Symbol>,
    side_len: usize,
    start_pos: Position,
    end_pos: Position,
    blocked_n: usize,
}

impl Map {
    /// Validates tokens in row-major order, so the first offending cell
    /// decides the reported error.
    pub fn from_tokens(grid: &TokenGrid) -> Result<Self, Error> {
        let mut start_pos: Option<Position> = None;
        let mut end_pos: Option<Position> = None;
        let mut blocked_n = 0;
        let mut symbols = Vec::with_capacity(grid.tokens.len());
        for (ind, token) in grid.tokens.iter().enumerate() {
            let pos = Position::new(ind / grid.side_len, ind % grid.side_len);
            let symbol = Symbol::from_token(token)
                .ok_or_else(|| Error::InvalidCell(token.clone(), pos))?;
            match symbol {
                Symbol::Start => {
                    if let Some(first_pos) = start_pos {
                        return Err(Error::DuplicateStart(first_pos, pos));
                    }

                    start_pos = Some(pos);
                }
                Symbol::End => {
                    if let Some(first_pos) = end_pos {
                        return Err(Error::DuplicateEnd(first_pos, pos));
                    }

                    end_pos = Some(pos);
                }
                Symbol::Blocked => blocked_n += 1,
                Symbol::Empty => (),
            }
            symbols.push(symbol);
        }

        let Some(start_pos) = start_pos else {
            return Err(Error::MissingStart);
        };
        let Some(end_pos) = end_pos else {
            return Err(Error::MissingEnd);
        };
        log::debug!(
            "Found start at {}, destination at {} and {} blocked cell(s).",
            start_pos,
            end_pos,
            blocked_n
        );

        Ok(Self {
            symbols,
            side_len: grid.side_len,
            start_pos,
            end_pos,
            blocked_n,
        })
    }

    pub fn side_len(&self) -> usize {
        self.side_len
    }

    pub fn cell_n(&self) -> usize {
        self.side_len * self.side_len
    }

    pub fn start_pos(&self) -> Position {
        self.start_pos
    }

    pub fn end_pos(&self) -> Position {
        self.end_pos
    }

    pub fn blocked_n(&self) -> usize {
        self.blocked_n
    }

    pub fn symbol(&self, pos: &Position) -> Option<&Symbol> {
        self.pos_to_ind(pos).and_then(|ind| self.symbols.get(ind))
    }

    pub(crate) fn pos_to_ind(&self, pos: &Position) -> Option<usize> {
        if self.is_inside(pos) {
            Some(pos.r * self.side_len + pos.c)
        } else {
            None
        }
    }

    fn is_inside(&self, pos: &Position) -> bool {
        pos.r < self.side_len && pos.c < self.side_len
    }
}

impl TryFrom<&TokenGrid> for Map {
    type Error = Error;

    fn try_from(value: &TokenGrid) -> Result<Self, Self::Error> {
        Self::from_tokens(value)
    }
}
