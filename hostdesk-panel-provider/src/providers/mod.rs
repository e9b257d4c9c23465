//! Panel adapter implementations

/// Shared helpers used by adapter implementations.
pub(crate) mod common;

#[cfg(feature = "cpanel")]
mod cpanel;
#[cfg(feature = "hostinger")]
mod hostinger;
#[cfg(feature = "plesk")]
mod plesk;
#[cfg(feature = "spaceship")]
mod spaceship;

#[cfg(feature = "cpanel")]
pub use cpanel::CpanelAdapter;
#[cfg(feature = "hostinger")]
pub use hostinger::HostingerAdapter;
#[cfg(feature = "plesk")]
pub use plesk::PleskAdapter;
#[cfg(feature = "spaceship")]
pub use spaceship::SpaceshipAdapter;
