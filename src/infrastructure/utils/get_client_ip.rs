use actix_web::HttpRequest;

/// Client address for logging. Forwarding headers (`Forwarded`, `X-Forwarded-For`)
/// are honoured only when the server sits behind a trusted proxy.
pub fn get_client_ip(req: &HttpRequest, trust_forwarded: bool) -> String {
    let info = req.connection_info();
    let addr = if trust_forwarded {
        info.realip_remote_addr()
    } else {
        info.peer_addr()
    };

    addr.unwrap_or("unknown").to_string()
}
