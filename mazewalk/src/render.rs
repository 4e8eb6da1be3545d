use crossterm::style::Stylize as _;
use mazecore::{
    algorithms::Path,
    coord::{Coord, Direction},
    events::{EventKind, MazeEvent},
    grid::Grid,
};

use crate::settings::{ColorScheme, Layout};

const CORNER: char = '+';
const H_WALL: char = '-';
const V_WALL: char = '|';
const PATH: char = '*';
const EXPLORED: char = '.';

/// Draws a grid as text, cells visited by the solver but not on the path
/// are dotted.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    layout: Layout,
    colors: Option<ColorScheme>,
}

impl TextRenderer {
    pub fn new(layout: Layout, colors: Option<ColorScheme>) -> Self {
        Self { layout, colors }
    }

    pub fn plain(layout: Layout) -> Self {
        Self::new(layout, None)
    }

    fn cell_width(&self) -> usize {
        self.layout.cell_width.max(1) as usize
    }

    fn paint(&self, text: String, pick: impl Fn(&ColorScheme) -> crossterm::style::Color) -> String {
        match &self.colors {
            Some(colors) => text.with(pick(colors)).to_string(),
            None => text,
        }
    }

    fn wall_run(&self, standing: bool) -> String {
        let fill = if standing { H_WALL } else { ' ' };
        self.paint(
            std::iter::repeat(fill).take(self.cell_width()).collect(),
            |c| c.wall,
        )
    }

    fn corner(&self) -> String {
        self.paint(CORNER.to_string(), |c| c.wall)
    }

    fn side(&self, standing: bool) -> String {
        if standing {
            self.paint(V_WALL.to_string(), |c| c.wall)
        } else {
            " ".to_string()
        }
    }

    fn interior(&self, grid: &Grid, pos: Coord, path: Option<&Path>) -> String {
        let width = self.cell_width();
        let (mark, on_path) = if path.is_some_and(|p| p.contains(pos)) {
            (PATH, true)
        } else if path.is_some() && grid.is_visited(pos) {
            (EXPLORED, false)
        } else {
            return " ".repeat(width);
        };

        let left = (width - 1) / 2;
        let text = format!("{}{}{}", " ".repeat(left), mark, " ".repeat(width - 1 - left));
        if on_path {
            self.paint(text, |c| c.path)
        } else {
            self.paint(text, |c| c.explored)
        }
    }

    /// Renders the maze, with the solver result when `path` is given.
    pub fn render(&self, grid: &Grid, path: Option<&Path>) -> String {
        let (top, left) = self.layout.margin;
        let indent = " ".repeat(left as usize);
        let mut out = "\n".repeat(top as usize);

        for row in 0..grid.rows() as i32 {
            out.push_str(&indent);
            for col in 0..grid.cols() as i32 {
                out.push_str(&self.corner());
                out.push_str(&self.wall_run(grid.wall(Coord(row, col), Direction::Up)));
            }
            out.push_str(&self.corner());
            out.push('\n');

            out.push_str(&indent);
            for col in 0..grid.cols() as i32 {
                let pos = Coord(row, col);
                out.push_str(&self.side(grid.wall(pos, Direction::Left)));
                out.push_str(&self.interior(grid, pos, path));
            }
            let last = Coord(row, grid.cols() as i32 - 1);
            out.push_str(&self.side(grid.wall(last, Direction::Right)));
            out.push('\n');
        }

        out.push_str(&indent);
        let bottom = grid.rows() as i32 - 1;
        for col in 0..grid.cols() as i32 {
            out.push_str(&self.corner());
            out.push_str(&self.wall_run(grid.wall(Coord(bottom, col), Direction::Down)));
        }
        out.push_str(&self.corner());
        out.push('\n');

        out
    }
}

/// One line description of an event, for replaying a recorded run.
pub fn describe(event: &MazeEvent) -> String {
    let (verb, dir) = match event.kind {
        EventKind::Visited => return format!("visit   {}", event.pos),
        EventKind::WallRemoved(dir) => ("carve  ", dir),
        EventKind::EdgeTried(dir) => ("try    ", dir),
        EventKind::EdgeRejected(dir) => ("reject ", dir),
        EventKind::EdgeConfirmed(dir) => ("confirm", dir),
    };
    let name = format!("{:?}", dir).to_lowercase();
    match event.target() {
        Some(target) => format!("{} {} {} -> {}", verb, event.pos, name, target),
        None => format!("{} {} {}", verb, event.pos, name),
    }
}

#[cfg(test)]
mod tests {
    use mazecore::algorithms::{DepthFirstSolver, MazeSolver as _};

    use super::*;

    fn layout(cell_width: u16) -> Layout {
        Layout {
            margin: (0, 0),
            cell_width,
        }
    }

    #[test]
    fn closed_single_cell() {
        let grid = Grid::new(1, 1).unwrap();
        let text = TextRenderer::plain(layout(3)).render(&grid, None);
        assert_eq!(text, "+---+\n|   |\n+---+\n");
    }

    #[test]
    fn corridor_with_path() {
        let mut grid = Grid::new(1, 2).unwrap();
        grid.remove_wall(Coord(0, 0), Direction::Right);
        let path = DepthFirstSolver.solve(&mut grid, &mut ()).unwrap();

        let text = TextRenderer::plain(layout(1)).render(&grid, Some(&path));
        assert_eq!(text, "+-+-+\n|* *|\n+-+-+\n");
    }

    #[test]
    fn explored_cells_are_dotted() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.remove_wall(Coord(0, 0), Direction::Down);
        grid.remove_wall(Coord(0, 0), Direction::Right);
        grid.remove_wall(Coord(0, 1), Direction::Down);
        let path = DepthFirstSolver.solve(&mut grid, &mut ()).unwrap();

        let text = TextRenderer::plain(layout(1)).render(&grid, Some(&path));
        assert_eq!(text, "+-+-+\n|* *|\n+ + +\n|.|*|\n+-+-+\n");
    }

    #[test]
    fn margin_is_applied() {
        let grid = Grid::new(1, 1).unwrap();
        let renderer = TextRenderer::plain(Layout {
            margin: (1, 2),
            cell_width: 1,
        });
        assert_eq!(renderer.render(&grid, None), "\n  +-+\n  | |\n  +-+\n");
    }

    #[test]
    fn describe_events() {
        let event = MazeEvent::new(Coord(1, 2), EventKind::WallRemoved(Direction::Left));
        assert_eq!(describe(&event), "carve   (1, 2) left -> (1, 1)");

        let event = MazeEvent::new(Coord(0, 0), EventKind::EdgeConfirmed(Direction::Down));
        assert_eq!(describe(&event), "confirm (0, 0) down -> (1, 0)");

        let event = MazeEvent::new(Coord(3, 4), EventKind::Visited);
        assert_eq!(describe(&event), "visit   (3, 4)");
    }
}
