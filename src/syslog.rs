//! RFC 5424 syslog messages and a minimal network sender.
//!
//! Only the fields a receiver needs to accept a message are filled in:
//! priority, timestamp, hostname, app name and the message text. Process id,
//! message id and structured data are always nil (`-`).

use std::fmt;
use std::io::{self, BufRead, Write};
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, TcpStream, ToSocketAddrs, UdpSocket};

use chrono::{DateTime, SecondsFormat, Utc};
use log::debug;
use thiserror::Error;

const NILVALUE: &str = "-";
const VERSION: u8 = 1;

const HOSTNAME_MAX: usize = 255;
const APP_NAME_MAX: usize = 48;

/// Word that ends [`pump`].
pub const EXIT_WORD: &str = ".exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Facility {
    Kern = 0,
    User = 1,
    Mail = 2,
    Daemon = 3,
    Auth = 4,
    Syslog = 5,
    Lpr = 6,
    News = 7,
    Uucp = 8,
    Cron = 9,
    AuthPriv = 10,
    Ftp = 11,
    Local0 = 16,
    Local1 = 17,
    Local2 = 18,
    Local3 = 19,
    Local4 = 20,
    Local5 = 21,
    Local6 = 22,
    Local7 = 23,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Severity {
    Emergency = 0,
    Alert = 1,
    Critical = 2,
    Error = 3,
    Warning = 4,
    Notice = 5,
    Info = 6,
    Debug = 7,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Priority {
    pub facility: Facility,
    pub severity: Severity,
}

impl Priority {
    /// The `PRI` value: facility * 8 + severity
    pub fn code(self) -> u8 {
        (self.facility as u8) * 8 + self.severity as u8
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self {
            facility: Facility::Daemon,
            severity: Severity::Info,
        }
    }
}

#[derive(Error, Debug)]
pub enum SyslogError {
    /// A header field holds a space, a non-printable or non-ASCII character,
    /// or is too long.
    #[error("invalid {field} {value:?}: expected at most {max} printable ASCII characters without spaces")]
    InvalidHeader {
        field: &'static str,
        value: String,
        max: usize,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A single syslog message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub priority: Priority,
    pub timestamp: DateTime<Utc>,
    pub hostname: String,
    pub app_name: String,
    pub message: String,
}

impl Message {
    /// A daemon/info message stamped with the current time.
    pub fn new(hostname: &str, app_name: &str, message: &str) -> Self {
        Self {
            priority: Priority::default(),
            timestamp: Utc::now(),
            hostname: hostname.to_string(),
            app_name: app_name.to_string(),
            message: message.to_string(),
        }
    }

    /// Check HOSTNAME and APP-NAME against RFC 5424. Empty fields are sent
    /// as nil and always pass.
    pub fn validate(&self) -> Result<(), SyslogError> {
        check_header("hostname", &self.hostname, HOSTNAME_MAX)?;
        check_header("app name", &self.app_name, APP_NAME_MAX)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

fn check_header(field: &'static str, value: &str, max: usize) -> Result<(), SyslogError> {
    let printable = value.bytes().all(|b| (33..=126).contains(&b));
    if printable && value.len() <= max {
        return Ok(());
    }
    Err(SyslogError::InvalidHeader {
        field,
        value: value.to_string(),
        max,
    })
}

fn or_nil(field: &str) -> &str {
    if field.is_empty() {
        NILVALUE
    } else {
        field
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}>{} {} {} {} {} {} {}",
            self.priority.code(),
            VERSION,
            self.timestamp.to_rfc3339_opts(SecondsFormat::Micros, true),
            or_nil(&self.hostname),
            or_nil(&self.app_name),
            NILVALUE,
            NILVALUE,
            NILVALUE,
        )?;
        if !self.message.is_empty() {
            write!(f, " {}", self.message)?;
        }
        Ok(())
    }
}

/// Connected transport to a syslog receiver.
#[derive(Debug)]
pub enum Sender {
    /// Stream transport; every message is terminated by `\n`.
    Tcp(TcpStream),
    /// One datagram per message.
    Udp(UdpSocket),
}

impl Sender {
    pub fn tcp(addr: impl ToSocketAddrs) -> io::Result<Self> {
        Ok(Sender::Tcp(TcpStream::connect(addr)?))
    }

    pub fn udp(addr: impl ToSocketAddrs) -> io::Result<Self> {
        let remote = addr.to_socket_addrs()?.next().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "address resolved to nothing")
        })?;
        let local: SocketAddr = if remote.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };
        let socket = UdpSocket::bind(local)?;
        socket.connect(remote)?;
        Ok(Sender::Udp(socket))
    }

    /// Send one message. A message with an invalid header is not sent.
    pub fn send(&mut self, message: &Message) -> Result<(), SyslogError> {
        message.validate()?;
        let mut data = message.to_bytes();
        debug!("sending {} bytes", data.len());
        match self {
            Sender::Tcp(stream) => {
                data.push(b'\n');
                stream.write_all(&data)?;
                stream.flush()?;
            }
            Sender::Udp(socket) => {
                socket.send(&data)?;
            }
        }
        Ok(())
    }
}

/// Send every whitespace-separated word of `input` as its own message.
///
/// Stops at end of input or at [`EXIT_WORD`]. Returns the number of messages
/// sent. `hostname` and `app_name` are checked before any input is read.
pub fn pump(
    input: impl BufRead,
    sender: &mut Sender,
    hostname: &str,
    app_name: &str,
) -> Result<usize, SyslogError> {
    Message::new(hostname, app_name, "").validate()?;

    let mut sent = 0;
    for line in input.lines() {
        let line = line?;
        for word in line.split_whitespace() {
            if word == EXIT_WORD {
                return Ok(sent);
            }
            sender.send(&Message::new(hostname, app_name, word))?;
            sent += 1;
        }
    }
    Ok(sent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::io::{BufReader, Cursor, Read};
    use std::net::TcpListener;

    fn fixed(message: &str) -> Message {
        Message {
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 45).unwrap(),
            ..Message::new("box", "test", message)
        }
    }

    #[test]
    fn test_priority_code() {
        assert_eq!(Priority::default().code(), 30);
        let p = Priority {
            facility: Facility::Local7,
            severity: Severity::Debug,
        };
        assert_eq!(p.code(), 191);
        let p = Priority {
            facility: Facility::Kern,
            severity: Severity::Emergency,
        };
        assert_eq!(p.code(), 0);
    }

    #[test]
    fn test_format() {
        assert_eq!(
            fixed("hello").to_string(),
            "<30>1 2024-03-01T12:30:45.000000Z box test - - - hello"
        );
    }

    #[test]
    fn test_format_nil_fields() {
        let mut m = fixed("");
        m.hostname.clear();
        m.app_name.clear();
        assert_eq!(m.to_bytes(), b"<30>1 2024-03-01T12:30:45.000000Z - - - - -");
    }

    #[test]
    fn test_validate_header() {
        assert!(fixed("x").validate().is_ok());

        let mut m = fixed("x");
        m.hostname.clear();
        m.app_name.clear();
        assert!(m.validate().is_ok());

        let mut m = fixed("x");
        m.hostname = "h".repeat(HOSTNAME_MAX);
        m.app_name = "a".repeat(APP_NAME_MAX);
        assert!(m.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_header() {
        let invalid = |hostname: &str, app_name: &str| {
            let mut m = fixed("x");
            m.hostname = hostname.to_string();
            m.app_name = app_name.to_string();
            match m.validate() {
                Err(SyslogError::InvalidHeader { field, .. }) => field,
                other => panic!("expected an invalid header, got {other:?}"),
            }
        };

        assert_eq!(invalid("my box", "test"), "hostname");
        assert_eq!(invalid("héte", "test"), "hostname");
        assert_eq!(invalid(&"h".repeat(HOSTNAME_MAX + 1), "test"), "hostname");
        assert_eq!(invalid("box", "my\tapp"), "app name");
        assert_eq!(invalid("box", &"a".repeat(APP_NAME_MAX + 1)), "app name");
    }

    #[test]
    fn test_send_rejects_bad_header() {
        let receiver = UdpSocket::bind("127.0.0.1:0").unwrap();
        let mut sender = Sender::udp(receiver.local_addr().unwrap()).unwrap();
        let mut m = fixed("ping");
        m.hostname = "my box".to_string();
        assert!(matches!(
            sender.send(&m),
            Err(SyslogError::InvalidHeader { .. })
        ));
    }

    #[test]
    fn test_pump_checks_header_first() {
        let receiver = UdpSocket::bind("127.0.0.1:0").unwrap();
        let mut sender = Sender::udp(receiver.local_addr().unwrap()).unwrap();
        let input = Cursor::new("one two\n");
        assert!(matches!(
            pump(input, &mut sender, "my box", "test"),
            Err(SyslogError::InvalidHeader { .. })
        ));
    }

    #[test]
    fn test_udp_sender() {
        let receiver = UdpSocket::bind("127.0.0.1:0").unwrap();
        let mut sender = Sender::udp(receiver.local_addr().unwrap()).unwrap();
        sender.send(&fixed("ping")).unwrap();

        let mut buf = [0u8; 256];
        let n = receiver.recv(&mut buf).unwrap();
        assert!(std::str::from_utf8(&buf[..n]).unwrap().ends_with(" - - - ping"));
    }

    #[test]
    fn test_pump_over_tcp() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let mut sender = Sender::tcp(listener.local_addr().unwrap()).unwrap();
        let (mut conn, _) = listener.accept().unwrap();

        let input = Cursor::new("one two\n\nthree .exit four\n");
        let sent = pump(input, &mut sender, "box", "test").unwrap();
        assert_eq!(sent, 3);
        drop(sender);

        let mut received = String::new();
        conn.read_to_string(&mut received).unwrap();
        let lines: Vec<&str> = received.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("<30>1 "));
        assert!(lines[0].ends_with(" box test - - - one"));
        assert!(lines[2].ends_with(" - - - three"));
    }

    #[test]
    fn test_pump_until_eof() {
        let receiver = UdpSocket::bind("127.0.0.1:0").unwrap();
        let mut sender = Sender::udp(receiver.local_addr().unwrap()).unwrap();
        let input = BufReader::new("a b".as_bytes());
        assert_eq!(pump(input, &mut sender, "h", "app").unwrap(), 2);
    }
}
