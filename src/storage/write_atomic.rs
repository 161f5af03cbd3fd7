use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::controllers::ports::file_presenter::FilePresenterPort;

/// Presents `data` into a temporary file next to `filepath`, then renames it
/// into place. On any error the target path is left untouched.
pub fn write_atomic<T, P>(presenter: &P, data: &T, filepath: impl AsRef<Path>) -> std::io::Result<()>
where
    T: ?Sized,
    P: FilePresenterPort<T> + ?Sized,
{
    let filepath = filepath.as_ref();
    let dir = match filepath.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(dir)?;

    let mut file = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(file.as_file_mut());
        presenter.present(data, &mut writer)?;
        writer.flush()?;
    }
    file.as_file().sync_all()?;
    file.persist(filepath).map_err(|err| err.error)?;

    Ok(())
}
