//! Downloaded project archives (gzip'd tarballs)

use std::io::Read;
use std::path::{Component, Path};

use flate2::read::GzDecoder;
use tar::Archive;

use crate::core::{ScaffoldError, ScaffoldResult};

/// Fetch an archive, failing on any non-2xx status
pub async fn download(client: &reqwest::Client, url: &str) -> ScaffoldResult<Vec<u8>> {
    tracing::debug!("downloading {}", url);

    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(ScaffoldError::Download {
            url: url.to_string(),
            status: response.status().as_u16(),
        });
    }

    Ok(response.bytes().await?.to_vec())
}

/// Unpack a `.tar.gz` into `dest`, returning the number of files written
pub fn unpack_tar_gz(data: &[u8], dest: &Path) -> ScaffoldResult<usize> {
    std::fs::create_dir_all(dest)?;

    let decoder = GzDecoder::new(data);
    let mut archive = Archive::new(decoder);
    let mut files = 0;

    for entry in archive
        .entries()
        .map_err(|e| ScaffoldError::archive(format!("unreadable archive: {}", e)))?
    {
        let mut entry = entry.map_err(|e| ScaffoldError::archive(format!("corrupt entry: {}", e)))?;
        let entry_path = entry
            .path()
            .map_err(|e| ScaffoldError::archive(format!("bad entry path: {}", e)))?
            .into_owned();

        check_entry_path(&entry_path)?;

        let target_path = dest.join(&entry_path);

        if entry.header().entry_type().is_dir() {
            std::fs::create_dir_all(&target_path)?;
        } else if entry.header().entry_type().is_file() {
            if let Some(parent) = target_path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let mut content = Vec::new();
            entry.read_to_end(&mut content)?;
            std::fs::write(&target_path, content)?;
            files += 1;

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Ok(mode) = entry.header().mode() {
                    let _ = std::fs::set_permissions(
                        &target_path,
                        std::fs::Permissions::from_mode(mode),
                    );
                }
            }
        }
    }

    Ok(files)
}

/// Reject absolute paths and `..` components
fn check_entry_path(path: &Path) -> ScaffoldResult<()> {
    let escapes = path.is_absolute()
        || path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)));

    if escapes || path.to_string_lossy().contains('\0') {
        return Err(ScaffoldError::archive(format!(
            "entry escapes the project directory: {}",
            path.display()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use tempfile::tempdir;

    fn tar_gz(entries: &[(&str, &[u8], u32)]) -> Vec<u8> {
        let encoder = GzEncoder::new(Vec::new(), Compression::default());
        let mut builder = tar::Builder::new(encoder);
        for (path, data, mode) in entries {
            let mut header = tar::Header::new_gnu();
            header.set_size(data.len() as u64);
            header.set_mode(*mode);
            header.set_cksum();
            builder.append_data(&mut header, path, *data).unwrap();
        }
        builder.into_inner().unwrap().finish().unwrap()
    }

    #[test]
    fn test_unpack_spring_like_archive() {
        let dir = tempdir().unwrap();
        let data = tar_gz(&[
            ("mvnw", b"#!/bin/sh\n", 0o755),
            ("pom.xml", b"<project/>", 0o644),
            ("src/main/java/net/example/App.java", b"class App {}", 0o644),
        ]);

        let files = unpack_tar_gz(&data, dir.path()).unwrap();

        assert_eq!(files, 3);
        assert!(dir.path().join("pom.xml").is_file());
        assert!(dir.path().join("src/main/java/net/example/App.java").is_file());

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(dir.path().join("mvnw")).unwrap().permissions().mode();
            assert_eq!(mode & 0o111, 0o111);
        }
    }

    /// Serve one canned HTTP response on a local port
    async fn serve_once(response: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{}/starter.tgz", addr)
    }

    #[tokio::test]
    async fn test_download_returns_body() {
        let url = serve_once("HTTP/1.1 200 OK\r\nContent-Length: 5\r\nConnection: close\r\n\r\nhello").await;
        let body = download(&reqwest::Client::new(), &url).await.unwrap();
        assert_eq!(body, b"hello");
    }

    #[tokio::test]
    async fn test_download_non_2xx_is_fatal() {
        let url = serve_once("HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n").await;
        let err = download(&reqwest::Client::new(), &url).await.unwrap_err();
        assert!(matches!(err, ScaffoldError::Download { status: 404, ref url } if url.ends_with("/starter.tgz")));
    }

    #[tokio::test]
    async fn test_download_refused_connection_is_http_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = download(&reqwest::Client::new(), &format!("http://{}/starter.tgz", addr))
            .await
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::Http(_)));
    }

    #[test]
    fn test_rejects_traversal() {
        assert!(check_entry_path(Path::new("../evil.sh")).is_err());
        assert!(check_entry_path(Path::new("src/../../evil.sh")).is_err());
        assert!(check_entry_path(Path::new("/etc/passwd")).is_err());
        assert!(check_entry_path(Path::new("src/main/App.java")).is_ok());
    }

    #[test]
    fn test_garbage_is_archive_error() {
        let dir = tempdir().unwrap();
        let err = unpack_tar_gz(b"not a tarball", dir.path()).unwrap_err();
        assert!(matches!(err, ScaffoldError::Archive(_) | ScaffoldError::Io(_)));
    }
}
