pub mod restock_low_stock;

pub use restock_low_stock::RestockLowStockUseCase;
