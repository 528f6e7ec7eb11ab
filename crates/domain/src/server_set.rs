use std::fmt;
use std::net::IpAddr;

/// Ordered candidate addresses for the next outgoing query.
///
/// Insertion keeps first-seen order and ignores duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerSet {
    addrs: Vec<IpAddr>,
}

impl ServerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_addrs(addrs: impl IntoIterator<Item = IpAddr>) -> Self {
        let mut set = Self::new();
        for addr in addrs {
            set.insert(addr);
        }
        set
    }

    /// Returns `false` if the address was already present.
    pub fn insert(&mut self, addr: IpAddr) -> bool {
        if self.addrs.contains(&addr) {
            return false;
        }
        self.addrs.push(addr);
        true
    }

    pub fn extend(&mut self, addrs: impl IntoIterator<Item = IpAddr>) {
        for addr in addrs {
            self.insert(addr);
        }
    }

    pub fn contains(&self, addr: &IpAddr) -> bool {
        self.addrs.contains(addr)
    }

    pub fn len(&self) -> usize {
        self.addrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addrs.is_empty()
    }

    pub fn as_slice(&self) -> &[IpAddr] {
        &self.addrs
    }

    pub fn iter(&self) -> impl Iterator<Item = &IpAddr> {
        self.addrs.iter()
    }

    /// Same members, starting from `offset` (modulo length) and wrapping around.
    pub fn rotated(&self, offset: usize) -> ServerSet {
        if self.addrs.is_empty() {
            return self.clone();
        }
        let mut addrs = self.addrs.clone();
        addrs.rotate_left(offset % self.addrs.len());
        ServerSet { addrs }
    }
}

impl FromIterator<IpAddr> for ServerSet {
    fn from_iter<T: IntoIterator<Item = IpAddr>>(iter: T) -> Self {
        Self::from_addrs(iter)
    }
}

impl fmt::Display for ServerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, addr) in self.addrs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", addr)?;
        }
        write!(f, "]")
    }
}
