//! The `git log --format` template the stream parser understands.

/// Full `--format` value passed to `git log`.
pub const LOG_FORMAT: &str = "___%nsha1:%H%nauthorName:%an%nauthorEmail:%ae%nauthorDate:%aD%ncommitterName:%cn%ncommitterEmail:%ce%ncommitterDate:%cD%ntitle:%s%n%w(80,1,1)%b";
