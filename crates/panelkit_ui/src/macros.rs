//! Macros for reducing boilerplate in widget and style implementations.

/// Generates a builder-style setter method for a field.
///
/// # Usage
///
/// ```ignore
/// // When method name matches field name:
/// builder_field!(item_height, i32);
/// // Generates: pub fn item_height(mut self, value: i32) -> Self { self.item_height = value; self }
///
/// // When method name differs from field name:
/// builder_field!(label_font, label_style.font, FontId);
/// ```
#[macro_export]
macro_rules! builder_field {
    // Method name matches field name
    ($name:ident, $type:ty) => {
        pub fn $name(mut self, value: $type) -> Self {
            self.$name = value;
            self
        }
    };
    // Method name differs from field name (nested paths allowed)
    ($method:ident, $($field:ident).+, $type:ty) => {
        pub fn $method(mut self, value: $type) -> Self {
            self.$($field).+ = value;
            self
        }
    };
}

/// Generates a `&mut self` setter that registers a [`Callback`](crate::Callback).
///
/// # Usage
///
/// ```ignore
/// callback_setter!(set_on_collapse, on_collapse, Rect);
/// // Generates: pub fn set_on_collapse<F>(&mut self, f: F) where F: FnMut(Rect) + 'static
///
/// callback_setter!(set_on_select, on_select, usize, i32);
/// // Generates: pub fn set_on_select<F>(&mut self, f: F) where F: FnMut(usize, i32) + 'static
/// ```
#[macro_export]
macro_rules! callback_setter {
    // Callback with a single parameter
    ($method:ident, $field:ident, $param:ty) => {
        pub fn $method<F>(&mut self, f: F)
        where
            F: FnMut($param) + 'static,
        {
            self.$field.set(f);
        }
    };
    // Callback with two parameters, stored as a tuple
    ($method:ident, $field:ident, $a:ty, $b:ty) => {
        pub fn $method<F>(&mut self, mut f: F)
        where
            F: FnMut($a, $b) + 'static,
        {
            self.$field.set(move |(a, b): ($a, $b)| f(a, b));
        }
    };
}
