// file: src/repository/remote.rs
// description: remote URL parsing into host, owner, and repository name
// reference: ssh and https remote shapes

/// Structured form of a configured remote URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRef {
    pub host: String,
    pub owner: String,
    pub name: String,
}

/// Parse an SSH-style remote: `user@host:owner/name[.git]`.
pub fn parse_ssh(url: &str) -> Option<RemoteRef> {
    let (user, rest) = url.split_once('@')?;
    if user.is_empty() || user.contains('/') || user.contains(':') {
        return None;
    }

    let (host, path) = rest.split_once(':')?;
    if host.is_empty() || host.contains('/') {
        return None;
    }

    let (owner, name) = split_owner_name(path)?;
    Some(RemoteRef {
        host: host.to_string(),
        owner,
        name,
    })
}

/// Parse an HTTPS-style remote: `https://host/owner/name[.git]`.
pub fn parse_https(url: &str) -> Option<RemoteRef> {
    let rest = url.strip_prefix("https://")?;
    let (host, path) = rest.split_once('/')?;
    if host.is_empty() {
        return None;
    }

    let (owner, name) = split_owner_name(path)?;
    Some(RemoteRef {
        host: host.to_string(),
        owner,
        name,
    })
}

/// Try the SSH shape first, then HTTPS. The parsed host must exactly equal
/// the configured provider hostname; anything else is a parse failure.
pub fn parse_remote_url(url: &str, provider: &str) -> Option<RemoteRef> {
    parse_ssh(url)
        .or_else(|| parse_https(url))
        .filter(|remote| remote.host == provider)
}

fn split_owner_name(path: &str) -> Option<(String, String)> {
    let (owner, name) = path.split_once('/')?;
    let name = name.strip_suffix(".git").unwrap_or(name);

    if owner.is_empty() || name.is_empty() {
        return None;
    }

    Some((owner.to_string(), name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_ssh_remote() {
        let remote = parse_ssh("git@github.com:alice/proj.git").unwrap();
        assert_eq!(remote.host, "github.com");
        assert_eq!(remote.owner, "alice");
        assert_eq!(remote.name, "proj");
    }

    #[test]
    fn test_parse_ssh_without_git_suffix() {
        let remote = parse_ssh("git@github.com:alice/proj").unwrap();
        assert_eq!(remote.name, "proj");
    }

    #[test]
    fn test_parse_https_remote() {
        let remote = parse_https("https://github.com/bob/proj").unwrap();
        assert_eq!(remote.host, "github.com");
        assert_eq!(remote.owner, "bob");
        assert_eq!(remote.name, "proj");
    }

    #[test]
    fn test_parse_https_with_git_suffix() {
        let remote = parse_https("https://gitlab.com/team/tool.git").unwrap();
        assert_eq!(remote.host, "gitlab.com");
        assert_eq!(remote.owner, "team");
        assert_eq!(remote.name, "tool");
    }

    #[test]
    fn test_owner_is_first_path_segment() {
        let remote = parse_https("https://github.com/org/group/nested").unwrap();
        assert_eq!(remote.owner, "org");
        assert_eq!(remote.name, "group/nested");
    }

    #[test]
    fn test_rejects_malformed_urls() {
        assert_eq!(parse_ssh("https://github.com/alice/proj"), None);
        assert_eq!(parse_ssh("git@github.com/alice/proj"), None);
        assert_eq!(parse_ssh("@github.com:alice/proj"), None);
        assert_eq!(parse_https("git@github.com:alice/proj.git"), None);
        assert_eq!(parse_https("http://github.com/alice/proj"), None);
        assert_eq!(parse_https("https://github.com/alice"), None);
        assert_eq!(parse_https("https://github.com//proj"), None);
    }

    #[test]
    fn test_ordered_fallback() {
        let ssh = parse_remote_url("git@github.com:alice/proj.git", "github.com").unwrap();
        assert_eq!(ssh.owner, "alice");

        let https = parse_remote_url("https://github.com/bob/proj", "github.com").unwrap();
        assert_eq!(https.owner, "bob");
    }

    #[test]
    fn test_provider_host_must_match_exactly() {
        assert_eq!(
            parse_remote_url("git@gitlab.com:alice/proj.git", "github.com"),
            None
        );
        assert_eq!(
            parse_remote_url("https://gitlab.com/alice/proj", "github.com"),
            None
        );
        assert_eq!(
            parse_remote_url("git@github.com.evil.org:alice/proj", "github.com"),
            None
        );
    }
}
