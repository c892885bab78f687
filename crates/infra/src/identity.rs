// crates/infra/src/identity.rs
//! Owner and group name lookup through the reentrant libc account APIs.

use std::{ffi::CStr, io, mem::MaybeUninit, ptr};

use dirlist_ports::identity::IdentityResolver;
use dirlist_shared_kernel::MetadataQueryError;

const FALLBACK_BUFFER: usize = 1024;
const MAX_BUFFER: usize = 1 << 20;

/// `IdentityResolver` backed by `getpwuid_r(3)` / `getgrgid_r(3)`.
///
/// Every call goes to the system databases; nothing is cached between entries.
#[derive(Debug, Default, Clone, Copy)]
pub struct PasswdResolver;

impl PasswdResolver {
    pub fn new() -> Self {
        Self
    }
}

impl IdentityResolver for PasswdResolver {
    fn user_name(&self, uid: u32) -> Result<String, MetadataQueryError> {
        let mut buf = initial_buffer(libc::_SC_GETPW_R_SIZE_MAX);
        loop {
            let mut pwd = MaybeUninit::<libc::passwd>::uninit();
            let mut result: *mut libc::passwd = ptr::null_mut();
            // SAFETY: every pointer refers to storage owned by this frame and `buf.len()`
            // is the true capacity of `buf`.
            let rc = unsafe {
                libc::getpwuid_r(uid, pwd.as_mut_ptr(), buf.as_mut_ptr(), buf.len(), &mut result)
            };
            match classify(rc, result.is_null(), buf.len()) {
                Outcome::Found => {
                    // SAFETY: a non-null result points at `pwd`, whose name lives in `buf`.
                    let name = unsafe { CStr::from_ptr((*result).pw_name) };
                    return Ok(name.to_string_lossy().into_owned());
                }
                Outcome::Missing => return Err(MetadataQueryError::UnknownOwner { uid }),
                Outcome::Grow => grow(&mut buf),
                Outcome::Failed(source) => {
                    return Err(MetadataQueryError::Lookup { what: "user", id: uid, source });
                }
            }
        }
    }

    fn group_name(&self, gid: u32) -> Result<String, MetadataQueryError> {
        let mut buf = initial_buffer(libc::_SC_GETGR_R_SIZE_MAX);
        loop {
            let mut grp = MaybeUninit::<libc::group>::uninit();
            let mut result: *mut libc::group = ptr::null_mut();
            // SAFETY: as in `user_name`.
            let rc = unsafe {
                libc::getgrgid_r(gid, grp.as_mut_ptr(), buf.as_mut_ptr(), buf.len(), &mut result)
            };
            match classify(rc, result.is_null(), buf.len()) {
                Outcome::Found => {
                    // SAFETY: a non-null result points at `grp`, whose name lives in `buf`.
                    let name = unsafe { CStr::from_ptr((*result).gr_name) };
                    return Ok(name.to_string_lossy().into_owned());
                }
                Outcome::Missing => return Err(MetadataQueryError::UnknownGroup { gid }),
                Outcome::Grow => grow(&mut buf),
                Outcome::Failed(source) => {
                    return Err(MetadataQueryError::Lookup { what: "group", id: gid, source });
                }
            }
        }
    }
}

#[derive(Debug)]
enum Outcome {
    Found,
    Missing,
    Grow,
    Failed(io::Error),
}

fn classify(rc: libc::c_int, null_result: bool, capacity: usize) -> Outcome {
    match rc {
        0 if null_result => Outcome::Missing,
        0 => Outcome::Found,
        // Some libcs report "no such entry" through errno instead of a null result.
        libc::ENOENT | libc::ESRCH | libc::EBADF | libc::EPERM if null_result => Outcome::Missing,
        libc::ERANGE if capacity < MAX_BUFFER => Outcome::Grow,
        errno => Outcome::Failed(io::Error::from_raw_os_error(errno)),
    }
}

fn initial_buffer(hint: libc::c_int) -> Vec<libc::c_char> {
    // SAFETY: sysconf has no preconditions.
    let suggested = unsafe { libc::sysconf(hint) };
    let size = usize::try_from(suggested).ok().filter(|&s| s > 0).unwrap_or(FALLBACK_BUFFER);
    vec![0; size.min(MAX_BUFFER)]
}

fn grow(buf: &mut Vec<libc::c_char>) {
    let next = (buf.len() * 2).min(MAX_BUFFER);
    buf.resize(next, 0);
}
