//! Static form layout
//!
//! Every element has a declared grid row and column. Nothing is derived
//! from how many widgets happen to exist.

use ratatui::layout::Rect;

use crate::core::Field;

/// Title of the form window
pub const WINDOW_TITLE: &str = "Stepper Motor Calculator";

/// Descriptive label under the Calculate control
pub const MACHINE_TITLE: &str = "PCB Drilling And Milling Machine";

/// Text of the calculate control
pub const CALCULATE_LABEL: &str = "Calculate";

/// Width of the label column, in cells
pub const LABEL_COLUMN_WIDTH: u16 = 24;

/// Vertical distance between grid rows, in cells
pub const ROW_PITCH: u16 = 2;

/// Blank rows above the first grid row
pub const TOP_PADDING: u16 = 1;

/// Blank columns on each side of the grid
pub const SIDE_PADDING: u16 = 1;

/// Something drawn on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    /// Text label of a field
    Label(Field),
    /// Entry box of a field
    Entry(Field),
    /// The calculate control
    CalculateButton,
    /// The machine title label
    MachineTitle,
}

/// Declared grid position of one element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// Element placed in the slot
    pub element: Element,
    /// Grid row
    pub row: u16,
    /// Grid column (0 = labels, 1 = entries)
    pub column: u16,
    /// Number of columns spanned
    pub column_span: u16,
}

impl Slot {
    const fn new(element: Element, row: u16, column: u16, column_span: u16) -> Self {
        Self {
            element,
            row,
            column,
            column_span,
        }
    }
}

/// The whole form, top to bottom
pub const FORM_LAYOUT: [Slot; 10] = [
    Slot::new(Element::Label(Field::StepAngle), 0, 0, 1),
    Slot::new(Element::Entry(Field::StepAngle), 0, 1, 1),
    Slot::new(Element::Label(Field::MicrostepSetting), 1, 0, 1),
    Slot::new(Element::Entry(Field::MicrostepSetting), 1, 1, 1),
    Slot::new(Element::Label(Field::Pitch), 2, 0, 1),
    Slot::new(Element::Entry(Field::Pitch), 2, 1, 1),
    Slot::new(Element::Label(Field::MaxRpm), 3, 0, 1),
    Slot::new(Element::Entry(Field::MaxRpm), 3, 1, 1),
    Slot::new(Element::CalculateButton, 4, 0, 2),
    Slot::new(Element::MachineTitle, 5, 0, 2),
];

/// Looks up the declared slot of an element
#[must_use]
pub fn slot_of(element: Element) -> Option<&'static Slot> {
    FORM_LAYOUT.iter().find(|slot| slot.element == element)
}

/// Screen rectangle of a slot inside the window's inner area
///
/// The result is clipped to `inner`, so a window too small for the grid
/// yields empty rectangles rather than out-of-bounds ones.
#[must_use]
pub fn slot_rect(slot: &Slot, inner: Rect) -> Rect {
    let y = inner
        .y
        .saturating_add(TOP_PADDING)
        .saturating_add(slot.row.saturating_mul(ROW_PITCH));
    let left = inner.x.saturating_add(SIDE_PADDING);
    let grid_width = inner.width.saturating_sub(2 * SIDE_PADDING);

    let (x, width) = match (slot.column, slot.column_span) {
        (0, 1) => (left, LABEL_COLUMN_WIDTH.min(grid_width)),
        (1, 1) => (
            left.saturating_add(LABEL_COLUMN_WIDTH),
            grid_width.saturating_sub(LABEL_COLUMN_WIDTH),
        ),
        _ => (left, grid_width),
    };

    Rect::new(x, y, width, 1).intersection(inner)
}

/// Centers a window of the given size in `area`, clipped to `area`
#[must_use]
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
