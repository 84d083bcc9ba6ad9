use docroot::http::request::Request;

#[test]
fn test_request_new() {
    let req = Request::new("GET", "/index.html");

    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "/index.html");
}

#[test]
fn test_request_wants_directory() {
    assert!(Request::new("GET", "/").wants_directory());
    assert!(Request::new("GET", "/deep/").wants_directory());
    assert!(!Request::new("GET", "/deep").wants_directory());
    assert!(!Request::new("GET", "/index.html").wants_directory());
}

#[test]
fn test_request_clone_and_eq() {
    let req = Request::new("GET", "/base.css");
    assert_eq!(req.clone(), req);
}
