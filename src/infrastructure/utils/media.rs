use actix_web::HttpRequest;
use url::Url;

/// Resolves stored file references into URLs the front-end can load.
///
/// A reference is either a path relative to the media root
/// (`projects/site.png`) or an already absolute `http(s)` URL, which is passed
/// through untouched.
#[derive(Debug, Clone)]
pub struct MediaConfig {
    media_url: String,
    public_base_url: Option<Url>,
}

impl MediaConfig {
    pub fn new(media_url: &str, public_base_url: Option<&str>) -> Result<Self, url::ParseError> {
        let media_url = normalize_media_url(media_url);

        let public_base_url = match public_base_url.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => Some(with_trailing_slash(Url::parse(raw)?)),
            None => None,
        };

        Ok(MediaConfig { media_url, public_base_url })
    }

    /// Links for a request: absolute URLs use the configured public base URL,
    /// falling back to the scheme and host the request arrived on.
    pub fn links_for(&self, req: &HttpRequest) -> MediaLinks {
        let origin = self.public_base_url.clone().or_else(|| {
            let conn = req.connection_info();
            Url::parse(&format!("{}://{}/", conn.scheme(), conn.host())).ok()
        });

        MediaLinks {
            media_url: self.media_url.clone(),
            origin,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MediaLinks {
    media_url: String,
    origin: Option<Url>,
}

impl MediaLinks {
    pub fn new(media_url: &str, origin: Option<Url>) -> Self {
        MediaLinks {
            media_url: normalize_media_url(media_url),
            origin: origin.map(with_trailing_slash),
        }
    }

    /// `media_url` + reference, or `""` for an unset reference.
    pub fn relative(&self, reference: &str) -> String {
        let reference = reference.trim();
        if reference.is_empty() {
            return String::new();
        }
        if is_absolute(reference) {
            return reference.to_string();
        }
        format!("{}{}", self.media_url, reference.trim_start_matches('/'))
    }

    /// Reference resolved against the request origin, or `""` when unset.
    pub fn absolute(&self, reference: &str) -> String {
        let relative = self.relative(reference);
        if relative.is_empty() || is_absolute(&relative) {
            return relative;
        }

        match &self.origin {
            Some(origin) => origin
                .join(relative.trim_start_matches('/'))
                .map(String::from)
                .unwrap_or(relative),
            None => relative,
        }
    }

    pub fn absolute_opt(&self, reference: Option<&str>) -> String {
        reference.map(|r| self.absolute(r)).unwrap_or_default()
    }
}

fn is_absolute(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}

fn normalize_media_url(media_url: &str) -> String {
    let trimmed = media_url.trim();
    if is_absolute(trimmed) {
        return format!("{}/", trimmed.trim_end_matches('/'));
    }

    let inner = trimmed.trim_matches('/');
    if inner.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", inner)
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
