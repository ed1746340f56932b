use crate::context::Resolver;
use crate::value::Value;

/// Resolve a dotted path such as `server.ports.0` against a resolver.
///
/// The whole path is first tried as a single key, so contexts may hold keys that
/// contain dots. Otherwise the first segment is looked up through the resolver and
/// the rest descend through maps (by key) and lists (by index). Any step that cannot
/// descend yields `None`.
pub fn resolve_path(path: &str, resolver: &dyn Resolver) -> Option<Value> {
    let direct = resolver.get(path);
    if direct.is_some() || !path.contains('.') {
        return direct;
    }

    let mut segments = path.split('.');
    let mut current = resolver.get(segments.next()?)?;
    for segment in segments {
        current = current.force().into_member(segment)?;
    }
    Some(current)
}
