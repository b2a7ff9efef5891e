pub mod binds;

#[cfg(test)]
mod test {
    use winit::keyboard::{KeyCode, PhysicalKey};

    use crate::binds::{BindKey, Binds};

    #[test]
    fn bind_json_abuse() {
        assert_eq!(serde_json::to_string(&KeyCode::KeyA).unwrap(), "\"KeyA\"");
        let key: BindKey = serde_json::from_str(
            &serde_json::to_string(&BindKey::Key(PhysicalKey::Code(KeyCode::Tab))).unwrap(),
        )
        .unwrap();
        assert_eq!(key, BindKey::Key(PhysicalKey::Code(KeyCode::Tab)));
    }

    #[derive(Debug, Clone, Hash, PartialEq, Eq)]
    enum Act {
        List,
        Chat,
        ChatTeam,
    }

    fn key(code: KeyCode) -> BindKey {
        BindKey::Key(PhysicalKey::Code(code))
    }

    #[test]
    fn press_and_click_actions() {
        let mut binds: Binds<Act> = Default::default();
        binds.register_bind(&[key(KeyCode::Tab)], Act::List);

        binds.handle_key_down(&key(KeyCode::Tab));
        assert!(binds.is_key_down(&key(KeyCode::Tab)));
        assert!(binds.is_action_active(&Act::List));
        let res = binds.process();
        assert!(res.press_actions.contains(&Act::List));
        assert!(res.cur_actions.contains(&Act::List));
        assert!(res.click_actions.is_empty());

        binds.handle_key_up(&key(KeyCode::Tab));
        assert!(!binds.is_key_down(&key(KeyCode::Tab)));
        assert!(!binds.is_action_active(&Act::List));
        let res = binds.process();
        assert!(res.click_actions.contains(&Act::List));
        assert!(res.cur_actions.is_empty());
    }

    #[test]
    fn longest_chain_wins() {
        let mut binds: Binds<Act> = Default::default();
        binds.register_bind(&[key(KeyCode::KeyT)], Act::Chat);
        binds.register_bind(&[key(KeyCode::ControlLeft), key(KeyCode::KeyT)], Act::ChatTeam);

        binds.handle_key_down(&key(KeyCode::ControlLeft));
        binds.handle_key_down(&key(KeyCode::KeyT));
        let res = binds.process();
        assert!(res.cur_actions.contains(&Act::ChatTeam));
        assert!(!res.cur_actions.contains(&Act::Chat));

        binds.handle_key_up(&key(KeyCode::ControlLeft));
        let res = binds.process();
        assert!(res.cur_actions.contains(&Act::Chat));
    }

    #[test]
    fn unbound_keys_are_tracked() {
        let mut binds: Binds<Act> = Default::default();
        binds.handle_key_down(&key(KeyCode::KeyQ));
        assert!(binds.is_key_down(&key(KeyCode::KeyQ)));
        assert!(binds.process().cur_actions.is_empty());
        binds.clear_pressed_keys();
        assert!(!binds.is_key_down(&key(KeyCode::KeyQ)));
    }
}
