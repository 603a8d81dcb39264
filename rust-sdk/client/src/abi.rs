use alloy_sol_types::sol;

sol! {
    /// Volatile/stable pair LP token. Only the functions used by the SDK are declared.
    interface ILpToken {
        function balanceOf(address account) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);
        function claimFees() external returns (uint256 claimed0, uint256 claimed1);
    }

    /// Router V2, used for quoting and removing liquidity.
    interface IRouterV2 {
        function quoteRemoveLiquidity(address tokenA, address tokenB, bool stable, uint256 liquidity) external view returns (uint256 amountA, uint256 amountB);
        function removeLiquidity(address tokenA, address tokenB, bool stable, uint256 liquidity, uint256 amountAMin, uint256 amountBMin, address to, uint256 deadline) external returns (uint256 amountA, uint256 amountB);
    }
}
