mod category_form;

mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod categories;
pub use categories::Categories;

mod modules;
pub use modules::{Accounting, Erp, Events, Sales};
