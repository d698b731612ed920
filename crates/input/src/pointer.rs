//! Pointer classification: mouse events become board targets.
//!
//! Only the release of the left button acts; presses, drags and other
//! buttons are ignored. A release over the grid yields the cell under it; a
//! release anywhere else yields the centre-relative vector the engine uses
//! to pick a shift direction.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::{BoardLayout, PointerTarget};

/// Map a mouse event to a board target, if it is an acting event at all.
pub fn pointer_target(event: &MouseEvent, layout: &BoardLayout) -> Option<PointerTarget> {
    match event.kind {
        MouseEventKind::Up(MouseButton::Left) => Some(classify(layout, event.column, event.row)),
        _ => None,
    }
}

fn classify(layout: &BoardLayout, col: u16, row: u16) -> PointerTarget {
    if let Some(coord) = layout.cell_at(col, row) {
        PointerTarget::Cell(coord)
    } else {
        let (dx, dy) = layout.relative_to_centre(col, row);
        PointerTarget::Outside { dx, dy }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Coord;
    use crossterm::event::KeyModifiers;

    fn layout() -> BoardLayout {
        BoardLayout {
            origin_x: 10,
            origin_y: 5,
            cell_w: 6,
            cell_h: 3,
        }
    }

    fn release(col: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column: col,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_release_on_grid_yields_cell() {
        let target = pointer_target(&release(11, 6), &layout());
        assert_eq!(target, Some(PointerTarget::Cell(Coord::new(0, 0))));

        let target = pointer_target(&release(25, 12), &layout());
        assert_eq!(target, Some(PointerTarget::Cell(Coord::new(2, 2))));
    }

    #[test]
    fn test_release_off_grid_yields_centre_relative_vector() {
        // Far to the right of the board (centre is col 25, row 12).
        let target = pointer_target(&release(60, 12), &layout());
        assert_eq!(target, Some(PointerTarget::Outside { dx: 35, dy: 0 }));

        // Above the board: positive y, rows doubled for aspect.
        let target = pointer_target(&release(25, 2), &layout());
        assert_eq!(target, Some(PointerTarget::Outside { dx: 0, dy: 20 }));
    }

    #[test]
    fn test_non_acting_events_ignored() {
        let press = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 11,
            row: 6,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(pointer_target(&press, &layout()), None);

        let right = MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Right),
            column: 11,
            row: 6,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(pointer_target(&right, &layout()), None);
    }
}
