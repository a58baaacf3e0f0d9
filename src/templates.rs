/// nano syntax rules for git commit/tag messages and rebase todo lists.
pub const GITCOMMIT_NANORC: &str = include_str!("../templates/gitcommit.nanorc");
