/// A publication in the static reference table
#[derive(Debug, Clone, PartialEq)]
pub struct Newspaper {
    pub id: i64,
    pub name: String,
    pub price: f64,
}
