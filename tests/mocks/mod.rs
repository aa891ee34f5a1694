pub mod mock_form_view;

pub use mock_form_view::MockFormView;
