
use futures::executor::block_on;
use passvault::ports::AuthOutcome;
use passvault::{AppActivity, AuthError, GateState, Password, Tag, VaultError, VaultManager};
use test_utils::{test_platform, TestPlatform};

/// A vault with local authentication enabled, reopened cold and unlocked once.
fn protected_vault(env: &TestPlatform) -> VaultManager {
    {
        let mut vault = block_on(VaultManager::open(env.platform.clone()));
        block_on(vault.add_password(Password::with_id("1", "GitHub", "pw"))).unwrap();
        assert!(block_on(vault.toggle_local_authentication()).unwrap());
    }

    let vault = block_on(VaultManager::open(env.platform.clone()));
    assert_eq!(vault.gate_state(), GateState::Locked);
    vault
}

#[test]
fn test_cold_start_with_authentication_enabled_is_locked() {
    let env = test_platform();
    let mut vault = protected_vault(&env);

    assert_eq!(vault.passwords(), Err(VaultError::Locked));
    assert_eq!(vault.tags(), Err(VaultError::Locked));
    assert_eq!(vault.settings(), Err(VaultError::Locked));
    assert_eq!(
        block_on(vault.add_password(Password::with_id("2", "Bank", "pw"))),
        Err(VaultError::Locked)
    );
    assert_eq!(
        block_on(vault.add_tag(Tag::with_id("t1", "Work"))),
        Err(VaultError::Locked)
    );
    assert_eq!(block_on(vault.export_backup()), Err(VaultError::Locked));
    assert_eq!(block_on(vault.import_backup()), Err(VaultError::Locked));
    assert!(vault.take_toasts().is_empty());
}

#[test]
fn test_foreground_success_unlocks() {
    let env = test_platform();
    let vault = protected_vault(&env);

    env.authenticator.push_success();
    assert_eq!(
        block_on(vault.set_activity(AppActivity::Active)),
        GateState::Unlocked
    );
    assert_eq!(vault.passwords().unwrap().len(), 1);
    assert_eq!(env.authenticator.calls(), 1);
}

#[test]
fn test_failed_or_denied_challenge_stays_locked() {
    let env = test_platform();
    let vault = protected_vault(&env);

    env.authenticator.push(Err(AuthError::Cancelled));
    assert_eq!(block_on(vault.set_activity(AppActivity::Active)), GateState::Locked);

    env.authenticator.push(Ok(AuthOutcome { success: false }));
    assert_eq!(block_on(vault.set_activity(AppActivity::Active)), GateState::Locked);

    assert_eq!(vault.passwords(), Err(VaultError::Locked));
}

#[test]
fn test_scenario_background_relocks_until_fresh_authentication() {
    let env = test_platform();
    let mut vault = protected_vault(&env);

    env.authenticator.push_success();
    block_on(vault.set_activity(AppActivity::Active));
    block_on(vault.add_password(Password::with_id("2", "Bank", "pw"))).unwrap();

    assert_eq!(
        block_on(vault.set_activity(AppActivity::Background)),
        GateState::Locked
    );
    assert_eq!(
        block_on(vault.add_password(Password::with_id("3", "Mail", "pw"))),
        Err(VaultError::Locked)
    );

    env.authenticator.push_success();
    assert_eq!(
        block_on(vault.set_activity(AppActivity::Active)),
        GateState::Unlocked
    );
    block_on(vault.add_password(Password::with_id("3", "Mail", "pw"))).unwrap();
    assert_eq!(vault.passwords().unwrap().len(), 3);
    assert_eq!(env.authenticator.calls(), 2);
}

#[test]
fn test_foreground_while_unlocked_does_not_prompt_again() {
    let env = test_platform();
    let vault = protected_vault(&env);

    env.authenticator.push_success();
    block_on(vault.set_activity(AppActivity::Active));
    block_on(vault.set_activity(AppActivity::Active));

    assert_eq!(env.authenticator.calls(), 1);
    assert_eq!(vault.gate_state(), GateState::Unlocked);
}

#[test]
fn test_inactive_counts_as_leaving_foreground() {
    let env = test_platform();
    let vault = protected_vault(&env);

    env.authenticator.push_success();
    block_on(vault.set_activity(AppActivity::Active));
    assert_eq!(
        block_on(vault.set_activity(AppActivity::Inactive)),
        GateState::Locked
    );
}

#[test]
fn test_stale_success_never_unlocks() {
    let env = test_platform();
    let vault = protected_vault(&env);

    env.authenticator.background_during_prompt(vault.gate());
    env.authenticator.push_success();

    assert_eq!(
        block_on(vault.set_activity(AppActivity::Active)),
        GateState::Locked
    );
    assert_eq!(vault.passwords(), Err(VaultError::Locked));

    env.authenticator.push_success();
    assert_eq!(
        block_on(vault.set_activity(AppActivity::Active)),
        GateState::Unlocked
    );
}

#[test]
fn test_unanswered_prompt_fails_closed() {
    let env = test_platform();
    let vault = protected_vault(&env);

    assert_eq!(
        block_on(vault.set_activity(AppActivity::Active)),
        GateState::Locked
    );
}

#[test]
fn test_disabled_authentication_bypasses_gate() {
    let env = test_platform();
    let vault = block_on(VaultManager::open(env.platform.clone()));

    assert_eq!(vault.gate_state(), GateState::Unlocked);
    block_on(vault.set_activity(AppActivity::Background));
    assert_eq!(vault.gate_state(), GateState::Unlocked);
    assert!(vault.passwords().is_ok());
    assert_eq!(env.authenticator.calls(), 0);
}

#[test]
fn test_toggle_off_opens_gate_for_good() {
    let env = test_platform();
    let mut vault = protected_vault(&env);

    env.authenticator.push_success();
    block_on(vault.set_activity(AppActivity::Active));
    assert!(!block_on(vault.toggle_local_authentication()).unwrap());

    block_on(vault.set_activity(AppActivity::Background));
    assert_eq!(vault.gate_state(), GateState::Unlocked);

    let reopened = block_on(VaultManager::open(env.platform.clone()));
    assert_eq!(reopened.gate_state(), GateState::Unlocked);
}
