use crate::ids::id_registry;

id_registry! {
    /// WMI unified command groups, derived from the top 12 bits of a
    /// command id.
    pub enum WmiCmdGroup(u32) {
        Scan = 3 => "WMI_UNIFIED_GRP_SCAN",
        Pdev = 4 => "WMI_UNIFIED_GRP_PDEV",
        Vdev = 5 => "WMI_UNIFIED_GRP_VDEV",
        Peer = 6 => "WMI_UNIFIED_GRP_PEER",
        Mgmt = 7 => "WMI_UNIFIED_GRP_MGMT",
        BaNeg = 8 => "WMI_UNIFIED_GRP_BA_NEG",
        StaPs = 9 => "WMI_UNIFIED_GRP_STA_PS",
        Dfs = 10 => "WMI_UNIFIED_GRP_DFS",
        Roam = 11 => "WMI_UNIFIED_GRP_ROAM",
        OflScan = 12 => "WMI_UNIFIED_GRP_OFL_SCAN",
        P2p = 13 => "WMI_UNIFIED_GRP_P2P",
        ApPs = 14 => "WMI_UNIFIED_GRP_AP_PS",
        RateCtrl = 15 => "WMI_UNIFIED_GRP_RATE_CTRL",
        Profile = 16 => "WMI_UNIFIED_GRP_PROFILE",
        Suspend = 17 => "WMI_UNIFIED_GRP_SUSPEND",
        BcnFilter = 18 => "WMI_UNIFIED_GRP_BCN_FILTER",
        Wow = 19 => "WMI_UNIFIED_GRP_WOW",
        Rtt = 20 => "WMI_UNIFIED_GRP_RTT",
        Spectral = 21 => "WMI_UNIFIED_GRP_SPECTRAL",
        Stats = 22 => "WMI_UNIFIED_GRP_STATS",
        ArpNsOfl = 23 => "WMI_UNIFIED_GRP_ARP_NS_OFL",
        NloOfl = 24 => "WMI_UNIFIED_GRP_NLO_OFL",
        GtkOfl = 25 => "WMI_UNIFIED_GRP_GTK_OFL",
        CsaOfl = 26 => "WMI_UNIFIED_GRP_CSA_OFL",
        Chatter = 27 => "WMI_UNIFIED_GRP_CHATTER",
        TidAddba = 28 => "WMI_UNIFIED_GRP_TID_ADDBA",
        Misc = 29 => "WMI_UNIFIED_GRP_MISC",
        Gpio = 30 => "WMI_UNIFIED_GRP_GPIO",
        Fwtest = 31 => "WMI_UNIFIED_GRP_FWTEST",
        Tdls = 32 => "WMI_UNIFIED_GRP_TDLS",
        Resmgr = 33 => "WMI_UNIFIED_GRP_RESMGR",
        StaSmps = 34 => "WMI_UNIFIED_GRP_STA_SMPS",
        WlanHb = 35 => "WMI_UNIFIED_GRP_WLAN_HB",
        Rmc = 36 => "WMI_UNIFIED_GRP_RMC",
        MhfOfl = 37 => "WMI_UNIFIED_GRP_MHF_OFL",
        LocationScan = 38 => "WMI_UNIFIED_GRP_LOCATION_SCAN",
        Oem = 39 => "WMI_UNIFIED_GRP_OEM",
        Nan = 40 => "WMI_UNIFIED_GRP_NAN",
        Coex = 41 => "WMI_UNIFIED_GRP_COEX",
        ObssOfl = 42 => "WMI_UNIFIED_GRP_OBSS_OFL",
        Lpi = 43 => "WMI_UNIFIED_GRP_LPI",
        Extscan = 44 => "WMI_UNIFIED_GRP_EXTSCAN",
        DhcpOfl = 45 => "WMI_UNIFIED_GRP_DHCP_OFL",
        Ipa = 46 => "WMI_UNIFIED_GRP_IPA",
        MdnsOfl = 47 => "WMI_UNIFIED_GRP_MDNS_OFL",
        SapOfl = 48 => "WMI_UNIFIED_GRP_SAP_OFL",
        Ocb = 49 => "WMI_UNIFIED_GRP_OCB",
        Soc = 50 => "WMI_UNIFIED_GRP_SOC",
        PktFilter = 51 => "WMI_UNIFIED_GRP_PKT_FILTER",
        Mawc = 52 => "WMI_UNIFIED_GRP_MAWC",
        PmfOffload = 53 => "WMI_UNIFIED_GRP_PMF_OFFLOAD",
    }
}

id_registry! {
    /// WMI unified command ids (host to target).
    pub enum WmiCmd(u32) {
        Init = 0x1 => "WMI_UNIFIED_INIT_CMDID",
        StartScan = 0x3001 => "WMI_UNIFIED_START_SCAN_CMDID",
        StopScan = 0x3002 => "WMI_UNIFIED_STOP_SCAN_CMDID",
        ScanChanList = 0x3003 => "WMI_UNIFIED_SCAN_CHAN_LIST_CMDID",
        ScanSchPrioTbl = 0x3004 => "WMI_UNIFIED_SCAN_SCH_PRIO_TBL_CMDID",
        ScanUpdateRequest = 0x3005 => "WMI_UNIFIED_SCAN_UPDATE_REQUEST_CMDID",
        ScanProbReqOui = 0x3006 => "WMI_UNIFIED_SCAN_PROB_REQ_OUI_CMDID",
        PdevSetRegdomain = 0x4001 => "WMI_UNIFIED_PDEV_SET_REGDOMAIN_CMDID",
        PdevSetChannel = 0x4002 => "WMI_UNIFIED_PDEV_SET_CHANNEL_CMDID",
        PdevSetParam = 0x4003 => "WMI_UNIFIED_PDEV_SET_PARAM_CMDID",
        PdevPktlogEnable = 0x4004 => "WMI_UNIFIED_PDEV_PKTLOG_ENABLE_CMDID",
        PdevPktlogDisable = 0x4005 => "WMI_UNIFIED_PDEV_PKTLOG_DISABLE_CMDID",
        PdevSetWmmParams = 0x4006 => "WMI_UNIFIED_PDEV_SET_WMM_PARAMS_CMDID",
        PdevSetHtCapIe = 0x4007 => "WMI_UNIFIED_PDEV_SET_HT_CAP_IE_CMDID",
        PdevSetVhtCapIe = 0x4008 => "WMI_UNIFIED_PDEV_SET_VHT_CAP_IE_CMDID",
        PdevSetDscpTidMap = 0x4009 => "WMI_UNIFIED_PDEV_SET_DSCP_TID_MAP_CMDID",
        PdevSetQuietMode = 0x400a => "WMI_UNIFIED_PDEV_SET_QUIET_MODE_CMDID",
        PdevGreenApPsEnable = 0x400b => "WMI_UNIFIED_PDEV_GREEN_AP_PS_ENABLE_CMDID",
        PdevGetTpcConfig = 0x400c => "WMI_UNIFIED_PDEV_GET_TPC_CONFIG_CMDID",
        PdevSetBaseMacaddr = 0x400d => "WMI_UNIFIED_PDEV_SET_BASE_MACADDR_CMDID",
        PdevDump = 0x400e => "WMI_UNIFIED_PDEV_DUMP_CMDID",
        PdevSetLedConfig = 0x400f => "WMI_UNIFIED_PDEV_SET_LED_CONFIG_CMDID",
        PdevGetTemperature = 0x4010 => "WMI_UNIFIED_PDEV_GET_TEMPERATURE_CMDID",
        PdevSetLedFlashing = 0x4011 => "WMI_UNIFIED_PDEV_SET_LED_FLASHING_CMDID",
        VdevCreate = 0x5001 => "WMI_UNIFIED_VDEV_CREATE_CMDID",
        VdevDelete = 0x5002 => "WMI_UNIFIED_VDEV_DELETE_CMDID",
        VdevStartRequest = 0x5003 => "WMI_UNIFIED_VDEV_START_REQUEST_CMDID",
        VdevRestartRequest = 0x5004 => "WMI_UNIFIED_VDEV_RESTART_REQUEST_CMDID",
        VdevUp = 0x5005 => "WMI_UNIFIED_VDEV_UP_CMDID",
        VdevStop = 0x5006 => "WMI_UNIFIED_VDEV_STOP_CMDID",
        VdevDown = 0x5007 => "WMI_UNIFIED_VDEV_DOWN_CMDID",
        VdevSetParam = 0x5008 => "WMI_UNIFIED_VDEV_SET_PARAM_CMDID",
        VdevInstallKey = 0x5009 => "WMI_UNIFIED_VDEV_INSTALL_KEY_CMDID",
        VdevWnmSleepmode = 0x500a => "WMI_UNIFIED_VDEV_WNM_SLEEPMODE_CMDID",
        VdevWmmAddts = 0x500b => "WMI_UNIFIED_VDEV_WMM_ADDTS_CMDID",
        VdevWmmDelts = 0x500c => "WMI_UNIFIED_VDEV_WMM_DELTS_CMDID",
        VdevSetWmmParams = 0x500d => "WMI_UNIFIED_VDEV_SET_WMM_PARAMS_CMDID",
        VdevSetGtxParams = 0x500e => "WMI_UNIFIED_VDEV_SET_GTX_PARAMS_CMDID",
        VdevIpsecNatkeepaliveFilter = 0x500f => "WMI_UNIFIED_VDEV_IPSEC_NATKEEPALIVE_FILTER_CMDID",
        VdevPlmreqStart = 0x5010 => "WMI_UNIFIED_VDEV_PLMREQ_START_CMDID",
        VdevPlmreqStop = 0x5011 => "WMI_UNIFIED_VDEV_PLMREQ_STOP_CMDID",
        VdevTsfTstampAction = 0x5012 => "WMI_UNIFIED_VDEV_TSF_TSTAMP_ACTION_CMDID",
        VdevSetIe = 0x5013 => "WMI_UNIFIED_VDEV_SET_IE_CMDID",
        PeerCreate = 0x6001 => "WMI_UNIFIED_PEER_CREATE_CMDID",
        PeerDelete = 0x6002 => "WMI_UNIFIED_PEER_DELETE_CMDID",
        PeerFlushTids = 0x6003 => "WMI_UNIFIED_PEER_FLUSH_TIDS_CMDID",
        PeerSetParam = 0x6004 => "WMI_UNIFIED_PEER_SET_PARAM_CMDID",
        PeerAssoc = 0x6005 => "WMI_UNIFIED_PEER_ASSOC_CMDID",
        PeerAddWdsEntry = 0x6006 => "WMI_UNIFIED_PEER_ADD_WDS_ENTRY_CMDID",
        PeerRemoveWdsEntry = 0x6007 => "WMI_UNIFIED_PEER_REMOVE_WDS_ENTRY_CMDID",
        PeerMcastGroup = 0x6008 => "WMI_UNIFIED_PEER_MCAST_GROUP_CMDID",
        PeerInfoReq = 0x6009 => "WMI_UNIFIED_PEER_INFO_REQ_CMDID",
        PeerGetEstimatedLinkspeed = 0x600a => "WMI_UNIFIED_PEER_GET_ESTIMATED_LINKSPEED_CMDID",
        PeerSetRateReportCondition = 0x600b => "WMI_UNIFIED_PEER_SET_RATE_REPORT_CONDITION_CMDID",
        BcnTx = 0x7001 => "WMI_UNIFIED_BCN_TX_CMDID",
        PdevSendBcn = 0x7002 => "WMI_UNIFIED_PDEV_SEND_BCN_CMDID",
        BcnTmpl = 0x7003 => "WMI_UNIFIED_BCN_TMPL_CMDID",
        BcnFilterRx = 0x7004 => "WMI_UNIFIED_BCN_FILTER_RX_CMDID",
        PrbReqFilterRx = 0x7005 => "WMI_UNIFIED_PRB_REQ_FILTER_RX_CMDID",
        MgmtTx = 0x7006 => "WMI_UNIFIED_MGMT_TX_CMDID",
        PrbTmpl = 0x7007 => "WMI_UNIFIED_PRB_TMPL_CMDID",
        MgmtTxSend = 0x7008 => "WMI_UNIFIED_MGMT_TX_SEND_CMDID",
        AddbaClearResp = 0x8001 => "WMI_UNIFIED_ADDBA_CLEAR_RESP_CMDID",
        AddbaSend = 0x8002 => "WMI_UNIFIED_ADDBA_SEND_CMDID",
        AddbaStatus = 0x8003 => "WMI_UNIFIED_ADDBA_STATUS_CMDID",
        DelbaSend = 0x8004 => "WMI_UNIFIED_DELBA_SEND_CMDID",
        AddbaSetResp = 0x8005 => "WMI_UNIFIED_ADDBA_SET_RESP_CMDID",
        SendSingleamsdu = 0x8006 => "WMI_UNIFIED_SEND_SINGLEAMSDU_CMDID",
        StaPowersaveMode = 0x9001 => "WMI_UNIFIED_STA_POWERSAVE_MODE_CMDID",
        StaPowersaveParam = 0x9002 => "WMI_UNIFIED_STA_POWERSAVE_PARAM_CMDID",
        StaMimoPsMode = 0x9003 => "WMI_UNIFIED_STA_MIMO_PS_MODE_CMDID",
        PdevDfsEnable = 0xa001 => "WMI_UNIFIED_PDEV_DFS_ENABLE_CMDID",
        PdevDfsDisable = 0xa002 => "WMI_UNIFIED_PDEV_DFS_DISABLE_CMDID",
        DfsPhyerrFilterEna = 0xa003 => "WMI_UNIFIED_DFS_PHYERR_FILTER_ENA_CMDID",
        DfsPhyerrFilterDis = 0xa004 => "WMI_UNIFIED_DFS_PHYERR_FILTER_DIS_CMDID",
        RoamScanMode = 0xb001 => "WMI_UNIFIED_ROAM_SCAN_MODE",
        RoamScanRssiThreshold = 0xb002 => "WMI_UNIFIED_ROAM_SCAN_RSSI_THRESHOLD",
        RoamScanPeriod = 0xb003 => "WMI_UNIFIED_ROAM_SCAN_PERIOD",
        RoamScanRssiChangeThreshold = 0xb004 => "WMI_UNIFIED_ROAM_SCAN_RSSI_CHANGE_THRESHOLD",
        RoamApProfile = 0xb005 => "WMI_UNIFIED_ROAM_AP_PROFILE",
        RoamChanList = 0xb006 => "WMI_UNIFIED_ROAM_CHAN_LIST",
        RoamScanCmd = 0xb007 => "WMI_UNIFIED_ROAM_SCAN_CMD",
        RoamSynchComplete = 0xb008 => "WMI_UNIFIED_ROAM_SYNCH_COMPLETE",
        RoamSetRicRequest = 0xb009 => "WMI_UNIFIED_ROAM_SET_RIC_REQUEST_CMDID",
        RoamInvoke = 0xb00a => "WMI_UNIFIED_ROAM_INVOKE_CMDID",
        RoamFilter = 0xb00b => "WMI_UNIFIED_ROAM_FILTER_CMDID",
        RoamSubnetChangeConfig = 0xb00c => "WMI_UNIFIED_ROAM_SUBNET_CHANGE_CONFIG_CMDID",
        RoamConfigureMawc = 0xb00d => "WMI_UNIFIED_ROAM_CONFIGURE_MAWC_CMDID",
        OflScanAddApProfile = 0xc001 => "WMI_UNIFIED_OFL_SCAN_ADD_AP_PROFILE",
        OflScanRemoveApProfile = 0xc002 => "WMI_UNIFIED_OFL_SCAN_REMOVE_AP_PROFILE",
        OflScanPeriod = 0xc003 => "WMI_UNIFIED_OFL_SCAN_PERIOD",
        P2pDevSetDeviceInfo = 0xd001 => "WMI_UNIFIED_P2P_DEV_SET_DEVICE_INFO",
        P2pDevSetDiscoverability = 0xd002 => "WMI_UNIFIED_P2P_DEV_SET_DISCOVERABILITY",
        P2pGoSetBeaconIe = 0xd003 => "WMI_UNIFIED_P2P_GO_SET_BEACON_IE",
        P2pGoSetProbeRespIe = 0xd004 => "WMI_UNIFIED_P2P_GO_SET_PROBE_RESP_IE",
        P2pSetVendorIeData = 0xd005 => "WMI_UNIFIED_P2P_SET_VENDOR_IE_DATA_CMDID",
        P2pDiscOffloadConfig = 0xd006 => "WMI_UNIFIED_P2P_DISC_OFFLOAD_CONFIG_CMDID",
        P2pDiscOffloadAppie = 0xd007 => "WMI_UNIFIED_P2P_DISC_OFFLOAD_APPIE_CMDID",
        P2pDiscOffloadPattern = 0xd008 => "WMI_UNIFIED_P2P_DISC_OFFLOAD_PATTERN_CMDID",
        P2pSetOpppsParam = 0xd009 => "WMI_UNIFIED_P2P_SET_OPPPS_PARAM_CMDID",
        ApPsPeerParam = 0xe001 => "WMI_UNIFIED_AP_PS_PEER_PARAM_CMDID",
        ApPsPeerUapsdCoex = 0xe002 => "WMI_UNIFIED_AP_PS_PEER_UAPSD_COEX_CMDID",
        ApPsEgapParam = 0xe003 => "WMI_UNIFIED_AP_PS_EGAP_PARAM_CMDID",
        PeerRateRetrySched = 0xf001 => "WMI_UNIFIED_PEER_RATE_RETRY_SCHED_CMDID",
        WlanProfileTrigger = 0x10001 => "WMI_UNIFIED_WLAN_PROFILE_TRIGGER_CMDID",
        WlanProfileSetHistIntvl = 0x10002 => "WMI_UNIFIED_WLAN_PROFILE_SET_HIST_INTVL_CMDID",
        WlanProfileGetProfileData = 0x10003 => "WMI_UNIFIED_WLAN_PROFILE_GET_PROFILE_DATA_CMDID",
        WlanProfileEnableProfileId = 0x10004 => "WMI_UNIFIED_WLAN_PROFILE_ENABLE_PROFILE_ID_CMDID",
        WlanProfileListProfileId = 0x10005 => "WMI_UNIFIED_WLAN_PROFILE_LIST_PROFILE_ID_CMDID",
        PdevSuspend = 0x11001 => "WMI_UNIFIED_PDEV_SUSPEND_CMDID",
        PdevResume = 0x11002 => "WMI_UNIFIED_PDEV_RESUME_CMDID",
        AddBcnFilter = 0x12001 => "WMI_UNIFIED_ADD_BCN_FILTER_CMDID",
        RmvBcnFilter = 0x12002 => "WMI_UNIFIED_RMV_BCN_FILTER_CMDID",
        WowAddWakePattern = 0x13001 => "WMI_UNIFIED_WOW_ADD_WAKE_PATTERN_CMDID",
        WowDelWakePattern = 0x13002 => "WMI_UNIFIED_WOW_DEL_WAKE_PATTERN_CMDID",
        WowEnableDisableWakeEvent = 0x13003 => "WMI_UNIFIED_WOW_ENABLE_DISABLE_WAKE_EVENT_CMDID",
        WowEnable = 0x13004 => "WMI_UNIFIED_WOW_ENABLE_CMDID",
        WowHostwakeupFromSleep = 0x13005 => "WMI_UNIFIED_WOW_HOSTWAKEUP_FROM_SLEEP_CMDID",
        WowIoacAddKeepalive = 0x13006 => "WMI_UNIFIED_WOW_IOAC_ADD_KEEPALIVE_CMDID",
        WowIoacDelKeepalive = 0x13007 => "WMI_UNIFIED_WOW_IOAC_DEL_KEEPALIVE_CMDID",
        WowIoacAddWakePattern = 0x13008 => "WMI_UNIFIED_WOW_IOAC_ADD_WAKE_PATTERN_CMDID",
        WowIoacDelWakePattern = 0x13009 => "WMI_UNIFIED_WOW_IOAC_DEL_WAKE_PATTERN_CMDID",
        D0WowEnableDisable = 0x1300a => "WMI_UNIFIED_D0_WOW_ENABLE_DISABLE_CMDID",
        ExtwowEnable = 0x1300b => "WMI_UNIFIED_EXTWOW_ENABLE_CMDID",
        ExtwowSetAppType1Params = 0x1300c => "WMI_UNIFIED_EXTWOW_SET_APP_TYPE1_PARAMS_CMDID",
        ExtwowSetAppType2Params = 0x1300d => "WMI_UNIFIED_EXTWOW_SET_APP_TYPE2_PARAMS_CMDID",
        WowEnableIcmpv6NaFlt = 0x1300e => "WMI_UNIFIED_WOW_ENABLE_ICMPV6_NA_FLT_CMDID",
        WowUdpSvcOfld = 0x1300f => "WMI_UNIFIED_WOW_UDP_SVC_OFLD_CMDID",
        WowHostwakeupGpioPinPatternConfig = 0x13010 => "WMI_UNIFIED_WOW_HOSTWAKEUP_GPIO_PIN_PATTERN_CONFIG_CMDID",
        RttMeasreq = 0x14001 => "WMI_UNIFIED_RTT_MEASREQ_CMDID",
        RttTsf = 0x14002 => "WMI_UNIFIED_RTT_TSF_CMDID",
        VdevSpectralScanConfigure = 0x15001 => "WMI_UNIFIED_VDEV_SPECTRAL_SCAN_CONFIGURE_CMDID",
        VdevSpectralScanEnable = 0x15002 => "WMI_UNIFIED_VDEV_SPECTRAL_SCAN_ENABLE_CMDID",
        RequestStats = 0x16001 => "WMI_UNIFIED_REQUEST_STATS_CMDID",
        MccSchedTrafficStats = 0x16002 => "WMI_UNIFIED_MCC_SCHED_TRAFFIC_STATS_CMDID",
        RequestStatsExt = 0x16003 => "WMI_UNIFIED_REQUEST_STATS_EXT_CMDID",
        RequestLinkStats = 0x16004 => "WMI_UNIFIED_REQUEST_LINK_STATS_CMDID",
        StartLinkStats = 0x16005 => "WMI_UNIFIED_START_LINK_STATS_CMDID",
        ClearLinkStats = 0x16006 => "WMI_UNIFIED_CLEAR_LINK_STATS_CMDID",
        GetFwMemDump = 0x16007 => "WMI_UNIFIED_GET_FW_MEM_DUMP_CMDID",
        DebugMesgFlush = 0x16008 => "WMI_UNIFIED_DEBUG_MESG_FLUSH_CMDID",
        DiagEventLogConfig = 0x16009 => "WMI_UNIFIED_DIAG_EVENT_LOG_CONFIG_CMDID",
        SetArpNsOffload = 0x17001 => "WMI_UNIFIED_SET_ARP_NS_OFFLOAD_CMDID",
        AddProactiveArpRspPattern = 0x17002 => "WMI_UNIFIED_ADD_PROACTIVE_ARP_RSP_PATTERN_CMDID",
        DelProactiveArpRspPattern = 0x17003 => "WMI_UNIFIED_DEL_PROACTIVE_ARP_RSP_PATTERN_CMDID",
        NetworkListOffloadConfig = 0x18001 => "WMI_UNIFIED_NETWORK_LIST_OFFLOAD_CONFIG_CMDID",
        Apfind = 0x18002 => "WMI_UNIFIED_APFIND_CMDID",
        PasspointListConfig = 0x18003 => "WMI_UNIFIED_PASSPOINT_LIST_CONFIG_CMDID",
        NloConfigureMawc = 0x18004 => "WMI_UNIFIED_NLO_CONFIGURE_MAWC_CMDID",
        GtkOffload = 0x19001 => "WMI_UNIFIED_GTK_OFFLOAD_CMDID",
        CsaOffloadEnable = 0x1a001 => "WMI_UNIFIED_CSA_OFFLOAD_ENABLE_CMDID",
        CsaOffloadChanswitch = 0x1a002 => "WMI_UNIFIED_CSA_OFFLOAD_CHANSWITCH_CMDID",
        ChatterSetMode = 0x1b001 => "WMI_UNIFIED_CHATTER_SET_MODE_CMDID",
        ChatterAddCoalescingFilter = 0x1b002 => "WMI_UNIFIED_CHATTER_ADD_COALESCING_FILTER_CMDID",
        ChatterDeleteCoalescingFilter = 0x1b003 => "WMI_UNIFIED_CHATTER_DELETE_COALESCING_FILTER_CMDID",
        ChatterCoalescingQuery = 0x1b004 => "WMI_UNIFIED_CHATTER_COALESCING_QUERY_CMDID",
        PeerTidAddba = 0x1c001 => "WMI_UNIFIED_PEER_TID_ADDBA_CMDID",
        PeerTidDelba = 0x1c002 => "WMI_UNIFIED_PEER_TID_DELBA_CMDID",
        StaDtimPsMethod = 0x1c003 => "WMI_UNIFIED_STA_DTIM_PS_METHOD_CMDID",
        StaUapsdAutoTrig = 0x1c004 => "WMI_UNIFIED_STA_UAPSD_AUTO_TRIG_CMDID",
        StaKeepalive = 0x1c005 => "WMI_UNIFIED_STA_KEEPALIVE_CMDID",
        BaReqSsn = 0x1c006 => "WMI_UNIFIED_BA_REQ_SSN_CMDID",
        Echo = 0x1d001 => "WMI_UNIFIED_ECHO_CMDID",
        PdevUtf = 0x1d002 => "WMI_UNIFIED_PDEV_UTF_CMDID",
        DbglogCfg = 0x1d003 => "WMI_UNIFIED_DBGLOG_CFG_CMDID",
        PdevQvit = 0x1d004 => "WMI_UNIFIED_PDEV_QVIT_CMDID",
        PdevFtmIntg = 0x1d005 => "WMI_UNIFIED_PDEV_FTM_INTG_CMDID",
        VdevSetKeepalive = 0x1d006 => "WMI_UNIFIED_VDEV_SET_KEEPALIVE_CMDID",
        VdevGetKeepalive = 0x1d007 => "WMI_UNIFIED_VDEV_GET_KEEPALIVE_CMDID",
        ForceFwHang = 0x1d008 => "WMI_UNIFIED_FORCE_FW_HANG_CMDID",
        SetMcastbcastFilter = 0x1d009 => "WMI_UNIFIED_SET_MCASTBCAST_FILTER_CMDID",
        ThermalMgmt = 0x1d00a => "WMI_UNIFIED_THERMAL_MGMT_CMDID",
        HostAutoShutdownCfg = 0x1d00b => "WMI_UNIFIED_HOST_AUTO_SHUTDOWN_CFG_CMDID",
        TpcChainmaskConfig = 0x1d00c => "WMI_UNIFIED_TPC_CHAINMASK_CONFIG_CMDID",
        SetAntennaDiversity = 0x1d00d => "WMI_UNIFIED_SET_ANTENNA_DIVERSITY_CMDID",
        OcbSetSched = 0x1d00e => "WMI_UNIFIED_OCB_SET_SCHED_CMDID",
        RssiBreachMonitorConfig = 0x1d00f => "WMI_UNIFIED_RSSI_BREACH_MONITOR_CONFIG_CMDID",
        LroConfig = 0x1d010 => "WMI_UNIFIED_LRO_CONFIG_CMDID",
        TransferDataToFlash = 0x1d011 => "WMI_UNIFIED_TRANSFER_DATA_TO_FLASH_CMDID",
        GpioConfig = 0x1e001 => "WMI_UNIFIED_GPIO_CONFIG_CMDID",
        GpioOutput = 0x1e002 => "WMI_UNIFIED_GPIO_OUTPUT_CMDID",
        Txbf = 0x1e003 => "WMI_UNIFIED_TXBF_CMDID",
        FwtestVdevMccSetTbttMode = 0x1f001 => "WMI_UNIFIED_FWTEST_VDEV_MCC_SET_TBTT_MODE_CMDID",
        FwtestP2pSetNoaParam = 0x1f002 => "WMI_UNIFIED_FWTEST_P2P_SET_NOA_PARAM_CMDID",
        UnitTest = 0x1f003 => "WMI_UNIFIED_UNIT_TEST_CMDID",
        TdlsSetState = 0x20001 => "WMI_UNIFIED_TDLS_SET_STATE_CMDID",
        TdlsPeerUpdate = 0x20002 => "WMI_UNIFIED_TDLS_PEER_UPDATE_CMDID",
        TdlsSetOffchanMode = 0x20003 => "WMI_UNIFIED_TDLS_SET_OFFCHAN_MODE_CMDID",
        ResmgrAdaptiveOcsEnableDisable = 0x21001 => "WMI_UNIFIED_RESMGR_ADAPTIVE_OCS_ENABLE_DISABLE_CMDID",
        ResmgrSetChanTimeQuota = 0x21002 => "WMI_UNIFIED_RESMGR_SET_CHAN_TIME_QUOTA_CMDID",
        ResmgrSetChanLatency = 0x21003 => "WMI_UNIFIED_RESMGR_SET_CHAN_LATENCY_CMDID",
        StaSmpsForceMode = 0x22001 => "WMI_UNIFIED_STA_SMPS_FORCE_MODE_CMDID",
        StaSmpsParam = 0x22002 => "WMI_UNIFIED_STA_SMPS_PARAM_CMDID",
        HbSetEnable = 0x23001 => "WMI_UNIFIED_HB_SET_ENABLE_CMDID",
        HbSetTcpParams = 0x23002 => "WMI_UNIFIED_HB_SET_TCP_PARAMS_CMDID",
        HbSetTcpPktFilter = 0x23003 => "WMI_UNIFIED_HB_SET_TCP_PKT_FILTER_CMDID",
        HbSetUdpParams = 0x23004 => "WMI_UNIFIED_HB_SET_UDP_PARAMS_CMDID",
        HbSetUdpPktFilter = 0x23005 => "WMI_UNIFIED_HB_SET_UDP_PKT_FILTER_CMDID",
        RmcSetMode = 0x24001 => "WMI_UNIFIED_RMC_SET_MODE_CMDID",
        RmcSetActionPeriod = 0x24002 => "WMI_UNIFIED_RMC_SET_ACTION_PERIOD_CMDID",
        RmcConfig = 0x24003 => "WMI_UNIFIED_RMC_CONFIG_CMDID",
        MhfOffloadSetMode = 0x25001 => "WMI_UNIFIED_MHF_OFFLOAD_SET_MODE_CMDID",
        MhfOffloadPlumbRoutingTbl = 0x25002 => "WMI_UNIFIED_MHF_OFFLOAD_PLUMB_ROUTING_TBL_CMDID",
        BatchScanEnable = 0x26001 => "WMI_UNIFIED_BATCH_SCAN_ENABLE_CMDID",
        BatchScanDisable = 0x26002 => "WMI_UNIFIED_BATCH_SCAN_DISABLE_CMDI",
        BatchScanTriggerResult = 0x26003 => "WMI_UNIFIED_BATCH_SCAN_TRIGGER_RESULT_CMDID",
        OemReq = 0x27001 => "WMI_UNIFIED_OEM_REQ_CMDID",
        OemRequest = 0x27002 => "WMI_UNIFIED_OEM_REQUEST_CMDID",
        Nan = 0x28001 => "WMI_UNIFIED_NAN_CMDID",
        ModemPowerState = 0x29001 => "WMI_UNIFIED_MODEM_POWER_STATE_CMDID",
        ChanAvoidUpdate = 0x29002 => "WMI_UNIFIED_CHAN_AVOID_UPDATE_CMDID",
        ObssScanEnable = 0x2a001 => "WMI_UNIFIED_OBSS_SCAN_ENABLE_CMDID",
        ObssScanDisable = 0x2a002 => "WMI_UNIFIED_OBSS_SCAN_DISABLE_CMDID",
        LpiMgmtSnoopingConfig = 0x2b001 => "WMI_UNIFIED_LPI_MGMT_SNOOPING_CONFIG_CMDID",
        LpiStartScan = 0x2b002 => "WMI_UNIFIED_LPI_START_SCAN_CMDID",
        LpiStopScan = 0x2b003 => "WMI_UNIFIED_LPI_STOP_SCAN_CMDID",
        ExtscanStart = 0x2c001 => "WMI_UNIFIED_EXTSCAN_START_CMDID",
        ExtscanStop = 0x2c002 => "WMI_UNIFIED_EXTSCAN_STOP_CMDID",
        ExtscanConfigureWlanChangeMonitor = 0x2c003 => "WMI_UNIFIED_EXTSCAN_CONFIGURE_WLAN_CHANGE_MONITOR_CMDID",
        ExtscanConfigureHotlistMonitor = 0x2c004 => "WMI_UNIFIED_EXTSCAN_CONFIGURE_HOTLIST_MONITOR_CMDID",
        ExtscanGetCachedResults = 0x2c005 => "WMI_UNIFIED_EXTSCAN_GET_CACHED_RESULTS_CMDID",
        ExtscanGetWlanChangeResults = 0x2c006 => "WMI_UNIFIED_EXTSCAN_GET_WLAN_CHANGE_RESULTS_CMDID",
        ExtscanSetCapabilities = 0x2c007 => "WMI_UNIFIED_EXTSCAN_SET_CAPABILITIES_CMDID",
        ExtscanGetCapabilities = 0x2c008 => "WMI_UNIFIED_EXTSCAN_GET_CAPABILITIES_CMDID",
        ExtscanConfigureHotlistSsidMonitor = 0x2c009 => "WMI_UNIFIED_EXTSCAN_CONFIGURE_HOTLIST_SSID_MONITOR_CMDID",
        ExtscanConfigureMawc = 0x2c00A => "WMI_UNIFIED_EXTSCAN_CONFIGURE_MAWC_CMDID",
        SetDhcpServerOffload = 0x2d001 => "WMI_UNIFIED_SET_DHCP_SERVER_OFFLOAD_CMDID",
        IpaOffloadEnableDisable = 0x2e001 => "WMI_UNIFIED_IPA_OFFLOAD_ENABLE_DISABLE_CMDID",
        MdnsOffloadEnable = 0x2f001 => "WMI_UNIFIED_MDNS_OFFLOAD_ENABLE_CMDID",
        MdnsSetFqdn = 0x2f002 => "WMI_UNIFIED_MDNS_SET_FQDN_CMDID",
        MdnsSetResponse = 0x2f003 => "WMI_UNIFIED_MDNS_SET_RESPONSE_CMDID",
        MdnsGetStats = 0x2f004 => "WMI_UNIFIED_MDNS_GET_STATS_CMDID",
        SapOflEnable = 0x30001 => "WMI_UNIFIED_SAP_OFL_ENABLE_CMDID",
        SapSetBlacklistParam = 0x30002 => "WMI_UNIFIED_SAP_SET_BLACKLIST_PARAM_CMDID",
        OcbSetConfig = 0x31001 => "WMI_UNIFIED_OCB_SET_CONFIG_CMDID",
        OcbSetUtcTime = 0x31002 => "WMI_UNIFIED_OCB_SET_UTC_TIME_CMDID",
        OcbStartTimingAdvert = 0x31003 => "WMI_UNIFIED_OCB_START_TIMING_ADVERT_CMDID",
        OcbStopTimingAdvert = 0x31004 => "WMI_UNIFIED_OCB_STOP_TIMING_ADVERT_CMDID",
        OcbGetTsfTimer = 0x31005 => "WMI_UNIFIED_OCB_GET_TSF_TIMER_CMDID",
        DccGetStats = 0x31006 => "WMI_UNIFIED_DCC_GET_STATS_CMDID",
        DccClearStats = 0x31007 => "WMI_UNIFIED_DCC_CLEAR_STATS_CMDID",
        DccUpdateNdl = 0x31008 => "WMI_UNIFIED_DCC_UPDATE_NDL_CMDID",
        SocSetPcl = 0x32001 => "WMI_UNIFIED_SOC_SET_PCL_CMDID",
        SocSetHwMode = 0x32002 => "WMI_UNIFIED_SOC_SET_HW_MODE_CMDID",
        SocSetDualMacConfig = 0x32003 => "WMI_UNIFIED_SOC_SET_DUAL_MAC_CONFIG_CMDID",
        SocSetAntennaMode = 0x32004 => "WMI_UNIFIED_SOC_SET_ANTENNA_MODE_CMDID",
        PacketFilterConfig = 0x33001 => "WMI_UNIFIED_PACKET_FILTER_CONFIG_CMDID",
        PacketFilterEnable = 0x33002 => "WMI_UNIFIED_PACKET_FILTER_ENABLE_CMDID",
        MawcSensorReportInd = 0x34001 => "WMI_UNIFIED_MAWC_SENSOR_REPORT_IND_CMDID",
        PmfOffloadSetSaQuery = 0x35001 => "WMI_UNIFIED_PMF_OFFLOAD_SET_SA_QUERY_CMDID",
    }
}

id_registry! {
    /// WMI unified event ids (target to host).
    pub enum WmiEvt(u32) {
        ServiceReady = 0x1 => "WMI_SERVICE_READY_EVENTID",
        Ready = 0x2 => "WMI_READY_EVENTID",
        Scan = 0x3001 => "WMI_SCAN_EVENTID",
        PdevTpcConfig = 0x4001 => "WMI_PDEV_TPC_CONFIG_EVENTID",
        ChanInfo = 0x4002 => "WMI_CHAN_INFO_EVENTID",
        Phyerr = 0x4003 => "WMI_PHYERR_EVENTID",
        VdevStartResp = 0x5001 => "WMI_VDEV_START_RESP_EVENTID",
        VdevStopped = 0x5002 => "WMI_VDEV_STOPPED_EVENTID",
        VdevInstallKeyComplete = 0x5003 => "WMI_VDEV_INSTALL_KEY_COMPLETE_EVENTID",
        PeerStaKickout = 0x6001 => "WMI_PEER_STA_KICKOUT_EVENTID",
        MgmtRx = 0x7001 => "WMI_MGMT_RX_EVENTID",
        HostSwba = 0x7002 => "WMI_HOST_SWBA_EVENTID",
        TbttoffsetUpdate = 0x7003 => "WMI_TBTTOFFSET_UPDATE_EVENTID",
        TxDelbaComplete = 0x8001 => "WMI_TX_DELBA_COMPLETE_EVENTID",
        TxAddbaComplete = 0x8002 => "WMI_TX_ADDBA_COMPLETE_EVENTID",
        Roam = 0xb001 => "WMI_ROAM_EVENTID",
        ProfileMatch = 0xb002 => "WMI_PROFILE_MATCH",
        WowWakeupHost = 0x13001 => "WMI_WOW_WAKEUP_HOST_EVENTID",
        RttMeasurementReport = 0x14001 => "WMI_RTT_MEASUREMENT_REPORT_EVENTID",
        TsfMeasurementReport = 0x14002 => "WMI_TSF_MEASUREMENT_REPORT_EVENTID",
        RttErrorReport = 0x14003 => "WMI_RTT_ERROR_REPORT_EVENTID",
        GtkOffloadStatus = 0x19001 => "WMI_GTK_OFFLOAD_STATUS_EVENTID",
        GtkRekeyFail = 0x19002 => "WMI_GTK_REKEY_FAIL_EVENTID",
        CsaHandling = 0x1a001 => "WMI_CSA_HANDLING_EVENTID",
        Echo = 0x1d001 => "WMI_ECHO_EVENTID",
        PdevUtf = 0x1d002 => "WMI_PDEV_UTF_EVENTID",
        DebugMesg = 0x1d003 => "WMI_DEBUG_MESG_EVENTID",
        UpdateStats = 0x1d004 => "WMI_UPDATE_STATS_EVENTID",
        DebugPrint = 0x1d005 => "WMI_DEBUG_PRINT_EVENTID",
        DcsInterference = 0x1d006 => "WMI_DCS_INTERFERENCE_EVENTID",
        PdevQvit = 0x1d007 => "WMI_PDEV_QVIT_EVENTID",
        WlanProfileData = 0x1d008 => "WMI_WLAN_PROFILE_DATA_EVENTID",
        PdevFtmIntg = 0x1d009 => "WMI_PDEV_FTM_INTG_EVENTID",
        WlanFreqAvoid = 0x1d00a => "WMI_WLAN_FREQ_AVOID_EVENTID",
        VdevGetKeepalive = 0x1d00b => "WMI_VDEV_GET_KEEPALIVE_EVENTID",
        Diag = 0x1d011 => "WMI_DIAG_EVENTID",
        GpioInput = 0x1e001 => "WMI_GPIO_INPUT_EVENTID",
    }
}

impl WmiCmdGroup {
    /// Command group of a unified command id.
    pub fn of(cmd_id: u32) -> Self {
        Self::from_id((cmd_id >> 12) & 0xfff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_command_resolves() {
        let cmd = WmiCmd::from_id(0x3001);
        assert_eq!(cmd, WmiCmd::StartScan);
        assert_eq!(cmd.name(), Some("WMI_UNIFIED_START_SCAN_CMDID"));
        assert_eq!(cmd.id(), 0x3001);
    }

    #[test]
    fn unknown_command_is_total() {
        let cmd = WmiCmd::from_id(0xdead01);
        assert_eq!(cmd, WmiCmd::Unknown(0xdead01));
        assert_eq!(cmd.name(), None);
        assert_eq!(cmd.id(), 0xdead01);
    }

    #[test]
    fn known_event_resolves() {
        let evt = WmiEvt::from_id(0x5001);
        assert_eq!(evt, WmiEvt::VdevStartResp);
        assert_eq!(evt.name(), Some("WMI_VDEV_START_RESP_EVENTID"));
    }

    #[test]
    fn command_group_derivation() {
        assert_eq!(WmiCmdGroup::of(0x3001), WmiCmdGroup::Scan);
        assert_eq!(WmiCmdGroup::of(0x4003), WmiCmdGroup::Pdev);
        assert_eq!(WmiCmdGroup::of(0x6004), WmiCmdGroup::Peer);
        // 0x1d001 >> 12 == 0x1d == 29 (misc group)
        assert_eq!(WmiCmdGroup::of(0x1d001), WmiCmdGroup::Misc);
        assert_eq!(WmiCmdGroup::of(0x1), WmiCmdGroup::Unknown(0));
        assert_eq!(WmiCmdGroup::of(0xfff999), WmiCmdGroup::Unknown(0xfff));
    }

    #[test]
    fn command_and_event_spaces_are_distinct_registries() {
        // 0x9002 is a command (sta powersave param) and no known event.
        assert!(WmiCmd::from_id(0x9002).name().is_some());
        assert_eq!(WmiEvt::from_id(0x9002), WmiEvt::Unknown(0x9002));
    }
}
