use rustc_hash::FxHashMap;

#[derive(Debug, PartialEq)]
pub struct ParameterDef {
    pub(crate) key: String,
    pub(crate) index: usize,
    pub(crate) length: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteType {
    Static,
    Dynamic,
}

/// Parameters captured from a path, e.g. `slug` for `/articles/[slug]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageParams(pub FxHashMap<String, String>);

impl PageParams {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for PageParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        PageParams(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

pub fn extract_params_from_raw_route(raw_route: &str) -> Vec<ParameterDef> {
    let mut params = Vec::new();
    let mut start = 0;

    while let Some(bracket_pos) = raw_route[start..].find('[') {
        let abs_pos = start + bracket_pos;

        // Check if escaped by counting preceding backslashes
        let backslash_count = raw_route[..abs_pos]
            .chars()
            .rev()
            .take_while(|&c| c == '\\')
            .count();

        if backslash_count % 2 == 1 {
            start = abs_pos + 1;
            continue;
        }

        if let Some(end_bracket) = raw_route[abs_pos + 1..].find(']') {
            let end_pos = abs_pos + 1 + end_bracket;
            let key = raw_route[abs_pos + 1..end_pos].to_string();

            params.push(ParameterDef {
                key,
                index: abs_pos,
                length: end_pos - abs_pos + 1,
            });

            start = end_pos + 1;
        } else {
            break;
        }
    }

    params
}

/// Normalizes a requested path: leading slash, no trailing slash (except for `/`), no query or fragment.
pub fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    format!("/{}", segments.join("/"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A compiled route pattern such as `/about` or `/articles/[slug]`.
///
/// A parameter always spans a whole path segment and captures exactly one segment of the requested path.
#[derive(Debug, Clone)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
    route_type: RouteType,
}

impl RoutePattern {
    pub fn parse(raw: &str) -> Self {
        let segments: Vec<Segment> = raw
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|segment| {
                let params = extract_params_from_raw_route(segment);
                match params.as_slice() {
                    [param] if param.index == 0 && param.length == segment.len() => {
                        Segment::Param(param.key.clone())
                    }
                    _ => Segment::Literal(segment.replace("\\[", "[").replace("\\]", "]")),
                }
            })
            .collect();

        let route_type = if segments.iter().any(|s| matches!(s, Segment::Param(_))) {
            RouteType::Dynamic
        } else {
            RouteType::Static
        };

        Self {
            raw: raw.to_string(),
            segments,
            route_type,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn route_type(&self) -> RouteType {
        self.route_type
    }

    /// Matches a normalized path, returning the captured parameters.
    pub fn matches(&self, path: &str) -> Option<PageParams> {
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = PageParams::default();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(literal) if literal == part => {}
                Segment::Literal(_) => return None,
                Segment::Param(key) => {
                    params.0.insert(key.clone(), part.to_string());
                }
            }
        }

        Some(params)
    }

    /// Builds the concrete path for the given parameters. Returns `None` when a parameter is missing.
    pub fn url(&self, params: &PageParams) -> Option<String> {
        let mut parts = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(literal) => parts.push(literal.as_str()),
                Segment::Param(key) => parts.push(params.get(key)?),
            }
        }

        Some(format!("/{}", parts.join("/")))
    }
}
