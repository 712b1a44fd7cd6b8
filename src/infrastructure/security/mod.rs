pub mod visit_cookie;
