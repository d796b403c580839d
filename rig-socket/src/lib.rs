use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use tokio::io::BufReader;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::UnixStream;

pub const DEFAULT_MAX_LINE_BYTES: usize = 1024 * 1024;

pub async fn read_json_line_with_limit<R, T>(
    reader: &mut R,
    max_bytes: usize,
) -> std::io::Result<Option<T>>
where
    R: AsyncBufRead + Unpin,
    T: DeserializeOwned,
{
    let mut buf = Vec::new();
    let n = reader.read_until(b'\n', &mut buf).await?;
    if n == 0 {
        return Ok(None);
    }
    if buf.len() > max_bytes {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!(
                "json line exceeds max length ({} > {})",
                buf.len(),
                max_bytes
            ),
        ));
    }

    let s = std::str::from_utf8(&buf)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    serde_json::from_str::<T>(s)
        .map(Some)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}

pub async fn read_json_line<R, T>(reader: &mut R) -> std::io::Result<Option<T>>
where
    R: AsyncBufRead + Unpin,
    T: DeserializeOwned,
{
    read_json_line_with_limit(reader, DEFAULT_MAX_LINE_BYTES).await
}

pub async fn write_json_line<W, T>(writer: &mut W, value: &T) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
    T: Serialize,
{
    let json = serde_json::to_string(value)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    writer.write_all(json.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}

/// Send one request line on `stream` and wait for exactly one response line.
///
/// The peer closing the connection before answering is `UnexpectedEof`.
pub async fn request_on<Req, Resp>(stream: UnixStream, req: &Req) -> std::io::Result<Resp>
where
    Req: Serialize,
    Resp: DeserializeOwned,
{
    let (reader, mut writer) = stream.into_split();
    let mut reader = BufReader::new(reader);

    write_json_line(&mut writer, req).await?;
    match read_json_line::<_, Resp>(&mut reader).await? {
        Some(resp) => Ok(resp),
        None => Err(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "connection closed before a response was received",
        )),
    }
}

/// Connect to the socket at `path` and perform a single request/response exchange.
pub async fn request<Req, Resp>(path: &Path, req: &Req) -> std::io::Result<Resp>
where
    Req: Serialize,
    Resp: DeserializeOwned,
{
    let stream = UnixStream::connect(path).await?;
    request_on(stream, req).await
}
