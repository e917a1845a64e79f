//! Discovery and preparation of the privileged `pg_worker` helper.

use super::BoxError;
use super::fs_utils::open_parent_dir;
use camino::{Utf8Path, Utf8PathBuf};
#[cfg(unix)]
use cap_std::fs::{Permissions, PermissionsExt};
use std::io::Write;
use std::sync::OnceLock;

static PREPARED_WORKER: OnceLock<Utf8PathBuf> = OnceLock::new();

/// Finds a `pg_worker` binary named by `PG_EMBEDDED_WORKER` or on `PATH`.
pub(super) fn locate_pg_worker_path() -> Option<Utf8PathBuf> {
    let from_env = std::env::var_os("PG_EMBEDDED_WORKER")
        .and_then(|worker| Utf8PathBuf::from_path_buf(worker.into()).ok())
        .filter(|worker| worker.is_file());
    from_env.or_else(|| {
        let path = std::env::var_os("PATH")?;
        std::env::split_paths(&path)
            .filter_map(|dir| Utf8PathBuf::from_path_buf(dir.join("pg_worker")).ok())
            .find(|candidate| candidate.is_file())
    })
}

/// Copies the worker somewhere the unprivileged user can execute it and
/// wraps it in a script that drops to `nobody` when invoked as root.
pub(super) fn prepare_pg_worker(worker: &Utf8Path) -> Result<Utf8PathBuf, BoxError> {
    if let Some(prepared) = PREPARED_WORKER.get() {
        return Ok(prepared.clone());
    }

    let temp_dir = Utf8PathBuf::from_path_buf(std::env::temp_dir())
        .map_err(|_| std::io::Error::other("temp directory path is not valid UTF-8"))?;
    let wrapper_path = temp_dir.join(format!("tollgate_pg_worker_{}", std::process::id()));
    let binary_path = wrapper_path.with_extension("bin");
    let (source_dir, source_name) = open_parent_dir(worker)?;
    let (wrapper_dir, wrapper_name) = open_parent_dir(&wrapper_path)?;
    let (binary_dir, binary_name) = open_parent_dir(&binary_path)?;

    source_dir.copy(source_name, &binary_dir, binary_name)?;
    let mut script = wrapper_dir.create(wrapper_name)?;
    write!(
        script,
        concat!(
            "#!/bin/sh\n",
            "if [ \"$(id -u)\" -eq 0 ]; then\n",
            "  exec /usr/sbin/runuser -u nobody -- {worker} \"$@\"\n",
            "fi\n",
            "exec {worker} \"$@\"\n",
        ),
        worker = binary_path.as_str()
    )?;
    drop(script);

    #[cfg(unix)]
    {
        wrapper_dir.set_permissions(wrapper_name, Permissions::from_mode(0o755))?;
        binary_dir.set_permissions(binary_name, Permissions::from_mode(0o755))?;
    }

    Ok(PREPARED_WORKER.get_or_init(|| wrapper_path).clone())
}
