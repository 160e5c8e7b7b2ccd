use super::*;

#[cfg(test)]
use pretty_assertions::assert_eq;

#[test]
fn test_response_to_vec() {
    let cases: Vec<(Response, &[u8])> = vec![
        (Response::Nil, &b"$-1\r\n"[..]),
        (Response::Integer(42), &b":42\r\n"[..]),
        (Response::Integer(-1), &b":-1\r\n"[..]),
        (Response::Data(b"hello".to_vec()), &b"$5\r\nhello\r\n"[..]),
        (Response::Data(vec![]), &b"$0\r\n\r\n"[..]),
        (Response::Error("ERR bad".into()), &b"-ERR bad\r\n"[..]),
        (Response::Status("OK".into()), &b"+OK\r\n"[..]),
        (Response::Array(vec![]), &b"*0\r\n"[..]),
    ];

    for (resp, want) in cases.iter() {
        assert_eq!(want.to_vec(), resp.to_vec(), "case: {:?}", resp);
    }
}

#[test]
fn test_response_nested_array() {
    let resp = Response::Array(vec![
        Response::Integer(0),
        Response::Integer(5460),
        Response::Array(vec!["127.0.0.1".into(), "7000".into()]),
    ]);

    assert_eq!(
        b"*3\r\n:0\r\n:5460\r\n*2\r\n$9\r\n127.0.0.1\r\n$4\r\n7000\r\n".to_vec(),
        resp.to_vec()
    );
}

#[test]
fn test_response_write_to() {
    let resp = Response::Array(vec![Response::from("a"), Response::from(3i64)]);

    let mut buf: Vec<u8> = Vec::new();
    resp.write_to(&mut buf).unwrap();
    assert_eq!(resp.to_vec(), buf);
}

#[test]
fn test_response_is_error() {
    assert!(Response::Error("x".into()).is_error());
    assert!(!Response::Status("x".into()).is_error());
    assert!(!Response::Nil.is_error());
}

#[test]
fn test_array_header() {
    assert_eq!(b"*3\r\n".to_vec(), ArrayHeader::new(3).to_vec());

    // a header followed by its elements is the same as a whole array
    let mut buf: Vec<u8> = Vec::new();
    ArrayHeader::new(2).write_to(&mut buf).unwrap();
    Response::from(1i64).write_to(&mut buf).unwrap();
    Response::from("x").write_to(&mut buf).unwrap();

    let whole = Response::Array(vec![Response::from(1i64), Response::from("x")]);
    assert_eq!(whole.to_vec(), buf);
}
