use crate::common::assert_commands_in_range;
use rotorsim::{
    BridgeConfig, ControlConfig, EngineState, FlightManager, PhysicsEngine, QuadPhysicsConfig,
    RemoteControlConfig, TransportEndpoint, MOTOR_COUNT,
};
use std::net::UdpSocket;

#[test]
fn test_local_flight_produces_valid_commands_at_variable_rates() {
    let config = ControlConfig::Local {
        physics: QuadPhysicsConfig::default(),
    };
    let mut manager = FlightManager::from_config(&config).unwrap();
    manager.start();

    // Irregular render-frame cadence, including a hitch
    let steps = [1.0 / 144.0, 1.0 / 60.0, 1.0 / 24.0, 0.25, 1.0 / 60.0];
    for _ in 0..200 {
        for dt in steps {
            let commands = manager.update(dt).unwrap();
            assert_commands_in_range(&commands);
        }
    }
}

#[test]
fn test_update_before_start_and_after_stop_is_defined() {
    let config = ControlConfig::Local {
        physics: QuadPhysicsConfig::default(),
    };
    let mut manager = FlightManager::from_config(&config).unwrap();

    assert!(manager.update(0.01).is_err());

    manager.start();
    assert!(manager.update(0.01).is_ok());

    manager.stop();
    assert!(manager.update(0.01).is_err());

    // Idempotent stop: same observable state afterwards
    manager.stop();
    assert_eq!(manager.state(), EngineState::Stopped);
}

#[test]
fn test_remote_manager_flies_on_external_commands() {
    let config = ControlConfig::Remote {
        control: RemoteControlConfig {
            bind: TransportEndpoint::new("127.0.0.1", 0),
        },
    };
    let mut manager = FlightManager::from_config(&config).unwrap();
    manager.start();

    let addr = match &manager {
        FlightManager::RemoteControlled(remote) => remote.local_addr().unwrap(),
        _ => panic!("expected remote variant"),
    };

    // Before any controller datagram, commands default to zero
    let commands = manager.update(0.01).unwrap();
    assert_eq!(commands.values(), &[0.0; MOTOR_COUNT]);

    let controller = UdpSocket::bind("127.0.0.1:0").unwrap();
    let payload: Vec<u8> = [0.1f64, 0.2, 0.3, 0.4]
        .iter()
        .flat_map(|v| v.to_le_bytes())
        .collect();
    controller.send_to(&payload, addr).unwrap();

    // Loopback delivery is asynchronous; poll briefly
    let expected = [0.1, 0.2, 0.3, 0.4];
    let mut got = *manager.update(0.01).unwrap().values();
    for _ in 0..100 {
        if got == expected {
            break;
        }
        std::thread::sleep(std::time::Duration::from_millis(1));
        got = *manager.update(0.01).unwrap().values();
    }
    assert_eq!(got, expected);
}

#[test]
fn test_bridge_config_selects_the_strategy() {
    let yaml = r#"
control:
  mode: local
  physics:
    mass: 1.2
    max_thrust: 30.0
    altitude_hold:
      target: 5.0
      pos_p: 0.2
      vel_p: 1.0
      vel_i: 0.1
      windup_max: 10.0
"#;
    let config: BridgeConfig = serde_yaml::from_str(yaml).unwrap();
    config.validate().unwrap();
    let manager = FlightManager::from_config(&config.control).unwrap();
    assert!(matches!(manager, FlightManager::LocalPhysics(_)));
}
