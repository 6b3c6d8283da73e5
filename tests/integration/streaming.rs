use crate::common::{assert_strips_reassemble, patterned_bytes, RecordingSink};
use rotorsim::{
    FrameGeometry, FrameTransport, SensorFrame, SensorStreamer, ShortStripPolicy,
    TransportEndpoint, MAX_DATAGRAM_BYTES,
};
use std::net::UdpSocket;

#[test]
fn test_camera_frame_fragments_into_24_datagrams() {
    // 480x640 RGBA at 20-row strips: the reference camera geometry
    let geometry = FrameGeometry::new(480, 640, 4, 20).unwrap();
    let bytes = patterned_bytes(geometry.frame_bytes());
    let frame = SensorFrame::new(geometry, &bytes).unwrap();

    let (sink, captured) = RecordingSink::new();
    let mut streamer = SensorStreamer::new(sink, geometry, ShortStripPolicy::Truncate);
    let sent = streamer.push(&frame).unwrap();

    assert_eq!(sent, 24);
    let strips = captured.borrow();
    assert_eq!(strips.len(), 24);
    for strip in strips.iter() {
        assert_eq!(strip.len(), 51_200);
    }
    // Strips arrive in row-major order: row 0, 20, 40, ... 460
    for (n, strip) in strips.iter().enumerate() {
        let offset = n * geometry.strip_bytes();
        assert_eq!(strip[0], bytes[offset]);
    }
    assert_strips_reassemble(&strips, &bytes);
}

#[test]
fn test_push_is_repeatable_across_ticks() {
    let geometry = FrameGeometry::new(48, 64, 4, 8).unwrap();
    let (sink, captured) = RecordingSink::new();
    let mut streamer = SensorStreamer::new(sink, geometry, ShortStripPolicy::Truncate);

    for tick in 0..3u8 {
        let bytes = vec![tick; geometry.frame_bytes()];
        let frame = SensorFrame::new(geometry, &bytes).unwrap();
        streamer.push(&frame).unwrap();
    }

    let strips = captured.borrow();
    assert_eq!(strips.len(), 18);
    // No cross-tick buffering: each tick's strips carry that tick's bytes
    assert!(strips[..6].iter().all(|s| s.iter().all(|&b| b == 0)));
    assert!(strips[6..12].iter().all(|s| s.iter().all(|&b| b == 1)));
    assert!(strips[12..].iter().all(|s| s.iter().all(|&b| b == 2)));
}

#[test]
fn test_transport_delivers_strips_over_loopback() {
    let receiver = UdpSocket::bind("127.0.0.1:0").unwrap();
    receiver.set_nonblocking(false).unwrap();
    receiver
        .set_read_timeout(Some(std::time::Duration::from_secs(2)))
        .unwrap();
    let port = receiver.local_addr().unwrap().port();

    let geometry = FrameGeometry::new(8, 16, 4, 4).unwrap();
    let bytes = patterned_bytes(geometry.frame_bytes());
    let frame = SensorFrame::new(geometry, &bytes).unwrap();

    let transport = FrameTransport::bind(TransportEndpoint::new("127.0.0.1", port)).unwrap();
    let mut streamer = SensorStreamer::new(transport, geometry, ShortStripPolicy::Truncate);
    assert_eq!(streamer.push(&frame).unwrap(), 2);

    let mut buf = [0u8; 1024];
    let mut received = Vec::new();
    for _ in 0..2 {
        let len = receiver.recv(&mut buf).unwrap();
        assert_eq!(len, geometry.strip_bytes());
        received.extend_from_slice(&buf[..len]);
    }
    assert_eq!(received, bytes);
}

#[test]
fn test_transport_rejects_oversized_payload_locally() {
    let receiver = UdpSocket::bind("127.0.0.1:0").unwrap();
    let port = receiver.local_addr().unwrap().port();
    let transport = FrameTransport::bind(TransportEndpoint::new("127.0.0.1", port)).unwrap();

    let oversized = vec![0u8; MAX_DATAGRAM_BYTES + 1];
    assert!(transport.send(&oversized).is_err());

    // At the limit is accepted by the local check (the OS may still
    // fragment, which is its business)
    let at_limit = vec![0u8; MAX_DATAGRAM_BYTES];
    let _ = transport.send(&at_limit);
}

#[test]
fn test_endpoint_is_immutable_after_bind() {
    let endpoint = TransportEndpoint::new("127.0.0.1", 5002);
    let transport = FrameTransport::bind(endpoint.clone()).unwrap();
    assert_eq!(transport.endpoint(), &endpoint);
}
