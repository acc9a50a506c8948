//! Plain data structures shared by the stores, the API client and the checkout flow.

pub mod cart;
pub mod checkout;
pub mod order;
pub mod product;

pub use cart::*;
pub use checkout::*;
pub use order::*;
pub use product::*;
