// Route path constants - single source of truth for all paths

pub const INDEX: &str = "/";
pub const INSERT: &str = "/insert";
pub const DELETE: &str = "/delete";
pub const UPDATE: &str = "/update";
pub const SEARCH: &str = "/search";
pub const REPORT: &str = "/report";
pub const HEALTH: &str = "/health";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
