use std::sync::Arc;

use hogos_tx_sender::{WalletEvent, WalletProvider};
use hogos_unpair_client::SONIC_CHAIN_ID;

use crate::tests::utils::*;
use crate::{
    LiquidityError, NotificationBoard, NotificationLevel, SessionChange, WalletSessionManager,
    NETWORK_SWITCH_NOTIFICATION, WALLET_NOTIFICATION,
};

fn session_manager(wallet: MockWallet) -> (Arc<MockWallet>, WalletSessionManager, Arc<NotificationBoard>) {
    let wallet = Arc::new(wallet);
    let board = Arc::new(NotificationBoard::new());
    let manager = WalletSessionManager::new(
        Some(wallet.clone() as Arc<dyn WalletProvider>),
        board.clone(),
    );
    (wallet, manager, board)
}

fn count(requests: &[String], method: &str) -> usize {
    requests.iter().filter(|request| *request == method).count()
}

#[tokio::test]
async fn test_connect_on_sonic() {
    let (wallet, manager, board) = session_manager(MockWallet::new(ACCOUNT));

    let signer = manager.connect().await.unwrap();
    assert_eq!(signer.address(), ACCOUNT);

    let session = manager.session();
    assert!(session.connected);
    assert!(!session.connecting);
    assert!(session.on_expected_network);
    assert_eq!(session.account, Some(ACCOUNT));
    assert_eq!(session.chain_id, Some(SONIC_CHAIN_ID));
    assert!(session.provider.is_some());
    assert!(session.last_error.is_none());

    assert_eq!(count(&wallet.requests(), "wallet_switchEthereumChain"), 0);
    assert!(board.get(NETWORK_SWITCH_NOTIFICATION).is_none());
    assert_eq!(
        board.get(WALLET_NOTIFICATION).unwrap().level,
        NotificationLevel::Success
    );
}

#[tokio::test]
async fn test_connect_switches_to_sonic() {
    let (wallet, manager, board) = session_manager(MockWallet::new(ACCOUNT).on_chain(1));

    manager.connect().await.unwrap();

    assert_eq!(wallet.chain_id(), SONIC_CHAIN_ID);
    assert_eq!(manager.session().chain_id, Some(SONIC_CHAIN_ID));
    assert!(manager.session().on_expected_network);
    assert_eq!(count(&wallet.requests(), "wallet_switchEthereumChain"), 1);
    assert_eq!(count(&wallet.requests(), "wallet_addEthereumChain"), 0);
    let notification = board.get(NETWORK_SWITCH_NOTIFICATION).unwrap();
    assert_eq!(notification.level, NotificationLevel::Success);
    assert_eq!(notification.message, "Successfully switched to Sonic network");
}

#[tokio::test]
async fn test_connect_adds_unknown_network() {
    let (wallet, manager, _) = session_manager(MockWallet::new(ACCOUNT).on_chain(1).without_sonic());

    manager.connect().await.unwrap();

    let requests = wallet.requests();
    assert_eq!(count(&requests, "wallet_addEthereumChain"), 1);
    assert_eq!(count(&requests, "wallet_switchEthereumChain"), 2);
    assert_eq!(wallet.chain_id(), SONIC_CHAIN_ID);
    assert!(manager.session().connected);
}

#[tokio::test]
async fn test_rejected_switch_leaves_clean_session() {
    let (wallet, manager, board) = session_manager(
        MockWallet::new(ACCOUNT)
            .on_chain(1)
            .rejecting("wallet_switchEthereumChain"),
    );

    let result = manager.connect().await;
    assert!(matches!(result, Err(LiquidityError::NetworkSwitchFailed(_))));

    let session = manager.session();
    assert!(!session.connected);
    assert!(!session.connecting);
    assert!(!session.on_expected_network);
    assert!(session.signer.is_none());
    assert!(session.last_error.is_some());
    assert!(manager.signer().is_none());
    assert_eq!(wallet.chain_id(), 1);

    assert_eq!(
        board.get(NETWORK_SWITCH_NOTIFICATION).unwrap().level,
        NotificationLevel::Error
    );
    assert_eq!(
        board.get(WALLET_NOTIFICATION).unwrap().level,
        NotificationLevel::Error
    );
}

#[tokio::test]
async fn test_rejected_add_network() {
    let (wallet, manager, _) = session_manager(
        MockWallet::new(ACCOUNT)
            .on_chain(1)
            .without_sonic()
            .rejecting("wallet_addEthereumChain"),
    );

    let result = manager.connect().await;
    assert!(matches!(result, Err(LiquidityError::NetworkSwitchFailed(_))));
    assert_eq!(count(&wallet.requests(), "wallet_switchEthereumChain"), 1);
    assert!(!manager.session().connecting);
}

#[tokio::test]
async fn test_rejected_accounts_request() {
    let (_, manager, _) = session_manager(MockWallet::new(ACCOUNT).rejecting("eth_requestAccounts"));

    let result = manager.connect().await;
    assert!(matches!(result, Err(LiquidityError::UserRejected(_))));
    let session = manager.session();
    assert!(!session.connected);
    assert!(!session.connecting);
    assert_eq!(session.last_error.as_deref(), Some("User rejected the request."));
}

#[tokio::test]
async fn test_no_wallet_detected() {
    let board = Arc::new(NotificationBoard::new());
    let manager = WalletSessionManager::new(None, board.clone());

    assert_eq!(manager.connect().await.unwrap_err(), LiquidityError::NoWalletDetected);
    let session = manager.session();
    assert!(!session.connecting);
    assert_eq!(
        session.last_error,
        Some(LiquidityError::NoWalletDetected.to_string())
    );
    assert_eq!(
        board.get(WALLET_NOTIFICATION).unwrap().level,
        NotificationLevel::Error
    );
}

#[tokio::test]
async fn test_disconnect() {
    let (_, manager, _) = session_manager(MockWallet::new(ACCOUNT));
    manager.connect().await.unwrap();

    manager.disconnect();
    let session = manager.session();
    assert!(!session.connected);
    assert!(session.account.is_none());
    assert!(session.provider.is_none());
}

#[tokio::test]
async fn test_empty_accounts_resets_session() {
    let (_, manager, _) = session_manager(MockWallet::new(ACCOUNT));
    manager.connect().await.unwrap();

    let change = manager
        .handle_event(WalletEvent::AccountsChanged(vec![]))
        .await
        .unwrap();
    assert_eq!(change, SessionChange::Reset);
    assert!(!manager.session().connected);
    assert!(manager.session().account.is_none());
}

#[tokio::test]
async fn test_account_change_reconnects() {
    let (wallet, manager, _) = session_manager(MockWallet::new(ACCOUNT));
    manager.connect().await.unwrap();

    wallet.set_accounts(vec![OTHER_ACCOUNT]);
    let change = manager
        .handle_event(WalletEvent::AccountsChanged(vec![OTHER_ACCOUNT]))
        .await
        .unwrap();
    assert_eq!(change, SessionChange::Reconnected);
    assert_eq!(manager.session().account, Some(OTHER_ACCOUNT));
    assert_eq!(manager.signer().unwrap().address(), OTHER_ACCOUNT);
}

#[tokio::test]
async fn test_same_account_is_unchanged() {
    let (wallet, manager, _) = session_manager(MockWallet::new(ACCOUNT));
    manager.connect().await.unwrap();
    let requests = wallet.requests().len();

    let change = manager
        .handle_event(WalletEvent::AccountsChanged(vec![ACCOUNT]))
        .await
        .unwrap();
    assert_eq!(change, SessionChange::Unchanged);
    assert_eq!(wallet.requests().len(), requests);
    assert!(manager.session().connected);
}

#[tokio::test]
async fn test_chain_change_reloads() {
    let (_, manager, _) = session_manager(MockWallet::new(ACCOUNT));
    manager.connect().await.unwrap();

    let change = manager
        .handle_event(WalletEvent::ChainChanged("0x1".to_string()))
        .await
        .unwrap();
    assert_eq!(change, SessionChange::Reloaded);
    assert!(!manager.session().connected);
    assert!(manager.signer().is_none());
}
