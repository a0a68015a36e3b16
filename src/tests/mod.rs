mod integration_page_assembly;
mod unit_category_filter;
