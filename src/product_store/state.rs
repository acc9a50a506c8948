use crate::model::ProductRef;

/// Catalog page, selected product and the request lifecycle flags.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductState {
    pub products: Vec<ProductRef>,
    pub selected_product: Option<ProductRef>,
    pub loading: bool,
    pub error: Option<String>,
    /// 1-based page number chosen by the consumer.
    pub current_page: u32,
}

impl Default for ProductState {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            selected_product: None,
            loading: false,
            error: None,
            current_page: 1,
        }
    }
}

impl ProductState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_list(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn resolve_list_success(&mut self, products: Vec<ProductRef>) {
        self.loading = false;
        self.products = products;
        self.error = None;
    }

    pub fn resolve_list_failure(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Unlike orders, the previous selection stays visible while the next one loads.
    pub fn request_detail(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn resolve_detail_success(&mut self, product: ProductRef) {
        self.loading = false;
        self.selected_product = Some(product);
        self.error = None;
    }

    pub fn resolve_detail_failure(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub fn set_current_page(&mut self, page: u32) {
        self.current_page = page;
    }

    pub fn clear_selected(&mut self) {
        self.selected_product = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn lamp() -> ProductRef {
        ProductRef::new(3, "Lamp", dec!(20), 5)
    }

    #[test]
    fn starts_on_page_one() {
        let state = ProductState::new();
        assert_eq!(state.current_page, 1);
        assert!(!state.loading);
    }

    #[test]
    fn list_failure_keeps_previous_products() {
        let mut state = ProductState::new();
        state.resolve_list_success(vec![lamp()]);

        state.request_list();
        state.resolve_list_failure("Failed to fetch products".to_string());

        assert_eq!(state.products, vec![lamp()]);
        assert_eq!(state.error.as_deref(), Some("Failed to fetch products"));
        assert!(!state.loading);
    }

    #[test]
    fn detail_request_keeps_selection() {
        let mut state = ProductState::new();
        state.resolve_detail_success(lamp());
        state.request_detail();
        assert_eq!(state.selected_product, Some(lamp()));

        state.clear_selected();
        assert_eq!(state.selected_product, None);
    }

    #[test]
    fn page_is_independent_of_requests() {
        let mut state = ProductState::new();
        state.set_current_page(3);
        state.request_list();
        state.resolve_list_success(Vec::new());
        assert_eq!(state.current_page, 3);
    }
}
