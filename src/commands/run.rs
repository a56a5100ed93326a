use crate::core::bootstrap;
use crate::core::config::InstallTarget;
use crate::core::platform::HostPlatform;
use crate::error::Result;
use std::ffi::OsString;

/// Entry point of the wrapper executable: install on first use, then hand
/// over to the real binary. Returns the exit code the wrapper should exit
/// with.
pub fn run_wrapper<I>(args: I) -> Result<i32>
where
    I: IntoIterator<Item = OsString>,
{
    let target = InstallTarget::from_current_exe()?;
    let result = bootstrap::run(&target, &HostPlatform::detect(), args)?;
    Ok(result.code)
}
