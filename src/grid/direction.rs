use glam::IVec2;
use strum_macros::AsRefStr;

use super::cell::Exits;

/// The four orthogonal directions a cell can connect in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// The four directions, in the order neighbors are listed.
    pub const DIRECTIONS: [Direction; 4] = [Direction::Left, Direction::Right, Direction::Up, Direction::Down];

    /// Returns the opposite direction. Constant time.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns the direction as a unit offset, with `y` growing downward.
    pub fn as_ivec2(self) -> IVec2 {
        self.into()
    }

    /// The exit flag corresponding to this direction.
    pub const fn exit(self) -> Exits {
        match self {
            Direction::Left => Exits::LEFT,
            Direction::Right => Exits::RIGHT,
            Direction::Up => Exits::UP,
            Direction::Down => Exits::DOWN,
        }
    }
}

impl From<Direction> for IVec2 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => -IVec2::Y,
            Direction::Down => IVec2::Y,
            Direction::Left => -IVec2::X,
            Direction::Right => IVec2::X,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_opposite() {
        for dir in Direction::DIRECTIONS {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(dir.as_ivec2() + dir.opposite().as_ivec2(), IVec2::ZERO);
        }
    }

    #[test]
    fn test_direction_as_ivec2() {
        assert_eq!(Direction::Up.as_ivec2(), -IVec2::Y);
        assert_eq!(Direction::Down.as_ivec2(), IVec2::Y);
        assert_eq!(Direction::Left.as_ivec2(), -IVec2::X);
        assert_eq!(Direction::Right.as_ivec2(), IVec2::X);
    }

    #[test]
    fn test_direction_exits_are_distinct() {
        let all = Direction::DIRECTIONS.iter().fold(Exits::empty(), |acc, dir| acc | dir.exit());
        assert_eq!(all, Exits::all());
    }

    #[test]
    fn test_direction_names() {
        assert_eq!(Direction::Left.as_ref(), "left");
        assert_eq!(Direction::Down.as_ref(), "down");
    }
}
