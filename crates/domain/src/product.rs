pub type ProductId = i64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub stock: i64,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, stock: i64) -> Self {
        Self {
            id,
            name: name.into(),
            stock,
        }
    }

    pub fn is_low_stock(&self, threshold: u32) -> bool {
        self.stock < i64::from(threshold)
    }
}
