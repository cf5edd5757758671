use nix::unistd::{Uid, User};

/// Resolves a numeric user id to a display name.
pub trait UserLookup {
    /// Returns the login name for `uid`, or a reason why none could be found.
    fn user_name(&self, uid: u32) -> std::result::Result<String, String>;
}

/// Looks users up in the system password database.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemUsers;

impl UserLookup for SystemUsers {
    fn user_name(&self, uid: u32) -> std::result::Result<String, String> {
        match User::from_uid(Uid::from_raw(uid)) {
            Ok(Some(user)) => Ok(user.name),
            Ok(None) => Err("no such user".to_string()),
            Err(errno) => Err(errno.to_string()),
        }
    }
}
