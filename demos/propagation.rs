//! Three result shapes in one call chain: pairs, bare codes, and an
//! Option at the rim where the caller no longer cares why.

use short_circuit::{Errno, check};

const ENOENT: Errno = Errno(2);
const EACCES: Errno = Errno(13);

fn lookup(path: &str) -> (u32, Errno) {
    match path {
        "/etc/hosts" => (3, Errno::OK),
        "/root/secret" => (0, EACCES),
        _ => (0, ENOENT),
    }
}

fn permitted(fd: u32) -> Errno {
    if fd == 0 { EACCES } else { Errno::OK }
}

fn open(path: &str) -> (u32, Errno) {
    let fd = check!(lookup(path));
    check!(permitted(fd));
    (fd, Errno::OK)
}

fn size_of(path: &str) -> Option<u64> {
    let fd = check!(open(path));
    Some(u64::from(fd) * 512)
}

fn main() {
    println!("open /etc/hosts   -> {:?}", open("/etc/hosts"));
    println!("open /root/secret -> {:?}", open("/root/secret"));
    println!("size /etc/hosts   -> {:?}", size_of("/etc/hosts"));
    println!("size /missing     -> {:?}", size_of("/missing"));
}
