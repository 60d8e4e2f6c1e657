use crate::api::DEFAULT_BASE_URL;

pub fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

pub fn default_verbose() -> bool {
    false
}
