/// Backend route serving the account CREST settings fragment.
pub const CREST_SETTINGS_PATH: &str = "/account/crest/";

/// Content type of a settings form POST.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// Header the backend uses to tell fragment requests from full page loads.
pub const REQUESTED_WITH_HEADER: &str = "X-Requested-With";
pub const REQUESTED_WITH_VALUE: &str = "XMLHttpRequest";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// The three interactions the settings panel has with its endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    InitialLoad,
    FollowLink,
    SubmitForm,
}

impl RequestKind {
    pub fn method(self) -> Method {
        match self {
            RequestKind::InitialLoad | RequestKind::FollowLink => Method::Get,
            RequestKind::SubmitForm => Method::Post,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RequestKind::InitialLoad => "initial load",
            RequestKind::FollowLink => "follow link",
            RequestKind::SubmitForm => "submit form",
        }
    }
}

/// Statuses whose body is rendered into the panel: any 2xx plus 304.
pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status) || status == 304
}
