use serde::Serialize;

/// Field separator requested from `git log` / `git show` pretty formats
pub const LOG_FIELD_SEPARATOR: char = '\x1f';

/// Pretty format producing one `hash, author, date, subject` record per line
pub const LOG_FORMAT: &str = "--pretty=format:%H%x1f%an%x1f%ad%x1f%s";

const RENAME_SEPARATOR: &str = " -> ";
const REMOTE_BRANCH_PREFIX: &str = "remotes/";

/// Parse `git status --porcelain` output
///
/// Lines shorter than three characters are skipped. Rename lines whose
/// remainder does not split into exactly an old and a new path are dropped.
/// Paths git C-quoted (non-ASCII or control bytes) are decoded.
pub fn parse_status_porcelain(output: &str) -> Vec<FileEntry> {
    let mut entries = Vec::new();

    for line in output.lines() {
        if line.len() < 3 {
            continue;
        }

        // Format: XY <path> or XY <old> -> <new>
        let (Some(code), Some(rest)) = (line.get(..2), line.get(3..)) else {
            continue;
        };
        let code = code.trim();

        if code.starts_with('R') {
            let parts: Vec<&str> = rest.split(RENAME_SEPARATOR).collect();
            if let [old_path, path] = parts.as_slice() {
                entries.push(FileEntry {
                    path: unquote_path(path),
                    old_path: Some(unquote_path(old_path)),
                    status: FileStatus::Renamed,
                });
            }
            continue;
        }

        entries.push(FileEntry {
            path: unquote_path(rest),
            old_path: None,
            status: FileStatus::from_code(code),
        });
    }

    entries
}

/// Decode a path git wrapped in double quotes with C-style escapes
///
/// `"caf\303\251.txt"` becomes `café.txt`. Unquoted paths come back trimmed.
pub fn unquote_path(raw: &str) -> String {
    let raw = raw.trim();
    let Some(inner) = raw.strip_prefix('"').and_then(|r| r.strip_suffix('"')) else {
        return raw.to_string();
    };

    let bytes = inner.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'\\' || i + 1 == bytes.len() {
            decoded.push(bytes[i]);
            i += 1;
            continue;
        }

        let escape = bytes[i + 1];
        i += 2;
        let byte = match escape {
            b'a' => 0x07,
            b'b' => 0x08,
            b't' => b'\t',
            b'n' => b'\n',
            b'v' => 0x0b,
            b'f' => 0x0c,
            b'r' => b'\r',
            b'0'..=b'7' => {
                // Up to three octal digits, one raw byte
                let mut value = u32::from(escape - b'0');
                let mut digits = 1;
                while digits < 3 && i < bytes.len() && (b'0'..=b'7').contains(&bytes[i]) {
                    value = value * 8 + u32::from(bytes[i] - b'0');
                    i += 1;
                    digits += 1;
                }
                u8::try_from(value).unwrap_or(b'?')
            }
            other => other,
        };
        decoded.push(byte);
    }

    String::from_utf8_lossy(&decoded).into_owned()
}

/// Parse `git log` output produced with [`LOG_FORMAT`]
///
/// Also accepts the legacy `hash|author|date|subject` layout, in which case
/// everything after the third `|` belongs to the subject.
pub fn parse_log(output: &str) -> Vec<CommitEntry> {
    output.lines().filter_map(parse_log_record).collect()
}

/// Parse the single record printed by `git show <hash> -s` with [`LOG_FORMAT`]
pub fn parse_commit(output: &str) -> Option<CommitEntry> {
    output.lines().find_map(parse_log_record)
}

fn parse_log_record(line: &str) -> Option<CommitEntry> {
    let parts: Vec<&str> = if line.contains(LOG_FIELD_SEPARATOR) {
        line.split(LOG_FIELD_SEPARATOR).collect()
    } else {
        line.splitn(4, '|').collect()
    };

    if parts.len() < 4 {
        return None;
    }

    Some(CommitEntry {
        hash: parts[0].to_string(),
        author: parts[1].to_string(),
        date: parts[2].to_string(),
        message: parts[3].to_string(),
    })
}

/// Parse `git branch -a` output
pub fn parse_branch_list(output: &str) -> Vec<BranchEntry> {
    let mut branches = Vec::new();

    for line in output.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // Format: * main
        //         feature-x
        //         remotes/origin/main
        let (is_current, name) = match line.strip_prefix('*') {
            Some(_) => (true, line.get(2..).unwrap_or_default()),
            None => (false, line),
        };

        // "* (HEAD detached at abc123)" is not a branch
        if name.starts_with('(') {
            continue;
        }

        let (is_remote, name) = match name.strip_prefix(REMOTE_BRANCH_PREFIX) {
            Some(stripped) => (true, stripped),
            None => (false, name),
        };

        branches.push(BranchEntry {
            name: name.to_string(),
            is_current,
            is_remote,
        });
    }

    branches
}

/// Parse `git remote -v` output, keeping the first line seen per remote
pub fn parse_remote_list(output: &str) -> Vec<RemoteEntry> {
    let mut remotes: Vec<RemoteEntry> = Vec::new();

    for line in output.lines() {
        // Format: origin\thttps://example.com/repo.git (fetch)
        let parts: Vec<&str> = line.split('\t').filter(|p| !p.is_empty()).collect();
        if parts.len() < 2 {
            continue;
        }

        let name = parts[0];
        let Some(url) = parts[1].split_whitespace().next() else {
            continue;
        };

        if remotes.iter().any(|r| r.name == name) {
            continue;
        }

        remotes.push(RemoteEntry {
            name: name.to_string(),
            url: url.to_string(),
        });
    }

    remotes
}

/// Parse `git tag` output
pub fn parse_tag_list(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Represents a file entry from git status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub path: String,
    /// Only set for renames
    pub old_path: Option<String>,
    pub status: FileStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FileStatus {
    Modified,
    Staged,
    Untracked,
    Deleted,
    Renamed,
    Ignored,
    Unknown,
}

impl FileStatus {
    /// Map a trimmed porcelain status code to a file status
    pub fn from_code(code: &str) -> Self {
        match code {
            "M" => FileStatus::Modified,
            "A" => FileStatus::Staged,
            "??" => FileStatus::Untracked,
            "D" => FileStatus::Deleted,
            c if c.starts_with('R') => FileStatus::Renamed,
            "!!" => FileStatus::Ignored,
            _ => FileStatus::Unknown,
        }
    }
}

/// Represents a commit from git log
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommitEntry {
    pub hash: String,
    pub author: String,
    pub date: String,
    pub message: String,
}

impl CommitEntry {
    /// Abbreviated hash for display
    pub fn short_hash(&self) -> &str {
        self.hash.get(..7).unwrap_or(&self.hash)
    }
}

/// Represents a branch from git branch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchEntry {
    pub name: String,
    pub is_current: bool,
    pub is_remote: bool,
}

/// Represents a configured remote
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoteEntry {
    pub name: String,
    pub url: String,
}
