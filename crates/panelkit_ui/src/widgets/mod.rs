// Widget implementations

mod combo_box;
mod combo_style;
pub mod scrollbar;

pub use combo_box::{
    combo_box, ComboBox, ComboGeometry, ComboItem, ListGeometry, RowGeometry, ScrollbarGeometry,
};
pub use combo_style::{ComboBoxStyle, LabelStyle};
