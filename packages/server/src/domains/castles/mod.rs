// Castle domain: the read-only record set behind the listing and detail pages.
pub mod models;
