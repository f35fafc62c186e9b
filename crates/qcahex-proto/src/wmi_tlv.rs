//! Structured decoding of selected WMI TLV command payloads.
//!
//! A small closed set of unified commands carries a TLV-framed structure:
//! a 2-byte LE length + 2-byte LE tag preamble followed by fixed-offset
//! little-endian fields. Decoding is strictly best-effort: a payload shorter
//! than the target structure (or a declared TLV length below the structure
//! minimum) yields `None` and the caller falls back to the raw hex dump.

use crate::ids::id_registry;
use crate::wmi_ids::WmiCmd;

id_registry! {
    /// WMI TLV tags.
    pub enum TlvTag(u16) {
        LastReserved = 15 => "WMI_TLV_TAG_LAST_RESERVED",
        ArrayUint32 = 16 => "WMI_TLV_TAG_ARRAY_UINT32",
        ArrayByte = 17 => "WMI_TLV_TAG_ARRAY_BYTE",
        ArrayStruct = 18 => "WMI_TLV_TAG_ARRAY_STRUCT",
        ArrayFixedStruct = 19 => "WMI_TLV_TAG_ARRAY_FIXED_STRUCT",
        LastArrayEnum = 31 => "WMI_TLV_TAG_LAST_ARRAY_ENUM",
        StructServiceReadyEvent = 32 => "WMI_TLV_TAG_STRUCT_SERVICE_READY_EVENT",
        StructHalRegCapabilities = 33 => "WMI_TLV_TAG_STRUCT_HAL_REG_CAPABILITIES",
        StructWlanHostMemReq = 34 => "WMI_TLV_TAG_STRUCT_WLAN_HOST_MEM_REQ",
        StructReadyEvent = 35 => "WMI_TLV_TAG_STRUCT_READY_EVENT",
        StructScanEvent = 36 => "WMI_TLV_TAG_STRUCT_SCAN_EVENT",
        StructPdevTpcConfigEvent = 37 => "WMI_TLV_TAG_STRUCT_PDEV_TPC_CONFIG_EVENT",
        StructChanInfoEvent = 38 => "WMI_TLV_TAG_STRUCT_CHAN_INFO_EVENT",
        StructCombPhyerrRxHdr = 39 => "WMI_TLV_TAG_STRUCT_COMB_PHYERR_RX_HDR",
        StructVdevStartResponseEvent = 40 => "WMI_TLV_TAG_STRUCT_VDEV_START_RESPONSE_EVENT",
        StructVdevStoppedEvent = 41 => "WMI_TLV_TAG_STRUCT_VDEV_STOPPED_EVENT",
        StructVdevInstallKeyCompleteEvent = 42 => "WMI_TLV_TAG_STRUCT_VDEV_INSTALL_KEY_COMPLETE_EVENT",
        StructPeerStaKickoutEvent = 43 => "WMI_TLV_TAG_STRUCT_PEER_STA_KICKOUT_EVENT",
        StructMgmtRxHdr = 44 => "WMI_TLV_TAG_STRUCT_MGMT_RX_HDR",
        StructTbttOffsetEvent = 45 => "WMI_TLV_TAG_STRUCT_TBTT_OFFSET_EVENT",
        StructTxDelbaCompleteEvent = 46 => "WMI_TLV_TAG_STRUCT_TX_DELBA_COMPLETE_EVENT",
        StructTxAddbaCompleteEvent = 47 => "WMI_TLV_TAG_STRUCT_TX_ADDBA_COMPLETE_EVENT",
        StructRoamEvent = 48 => "WMI_TLV_TAG_STRUCT_ROAM_EVENT",
        StructWowEventInfo = 49 => "WMI_TLV_TAG_STRUCT_WOW_EVENT_INFO",
        StructWowEventInfoSectionBitmap = 50 => "WMI_TLV_TAG_STRUCT_WOW_EVENT_INFO_SECTION_BITMAP",
        StructRttEventHeader = 51 => "WMI_TLV_TAG_STRUCT_RTT_EVENT_HEADER",
        StructRttErrorReportEvent = 52 => "WMI_TLV_TAG_STRUCT_RTT_ERROR_REPORT_EVENT",
        StructRttMeasEvent = 53 => "WMI_TLV_TAG_STRUCT_RTT_MEAS_EVENT",
        StructEchoEvent = 54 => "WMI_TLV_TAG_STRUCT_ECHO_EVENT",
        StructFtmIntgEvent = 55 => "WMI_TLV_TAG_STRUCT_FTM_INTG_EVENT",
        StructVdevGetKeepaliveEvent = 56 => "WMI_TLV_TAG_STRUCT_VDEV_GET_KEEPALIVE_EVENT",
        StructGpioInputEvent = 57 => "WMI_TLV_TAG_STRUCT_GPIO_INPUT_EVENT",
        StructCsaEvent = 58 => "WMI_TLV_TAG_STRUCT_CSA_EVENT",
        StructGtkOffloadStatusEvent = 59 => "WMI_TLV_TAG_STRUCT_GTK_OFFLOAD_STATUS_EVENT",
        StructIgtkInfo = 60 => "WMI_TLV_TAG_STRUCT_IGTK_INFO",
        StructDcsInterferenceEvent = 61 => "WMI_TLV_TAG_STRUCT_DCS_INTERFERENCE_EVENT",
        StructAthDcsCwInt = 62 => "WMI_TLV_TAG_STRUCT_ATH_DCS_CW_INT",
        StructAthDcsWlanIntStat = 63 => "WMI_TLV_TAG_STRUCT_ATH_DCS_WLAN_INT_STAT",
        StructWlanProfileCtxT = 64 => "WMI_TLV_TAG_STRUCT_WLAN_PROFILE_CTX_T",
        StructWlanProfileT = 65 => "WMI_TLV_TAG_STRUCT_WLAN_PROFILE_T",
        StructPdevQvitEvent = 66 => "WMI_TLV_TAG_STRUCT_PDEV_QVIT_EVENT",
        StructHostSwbaEvent = 67 => "WMI_TLV_TAG_STRUCT_HOST_SWBA_EVENT",
        StructTimInfo = 68 => "WMI_TLV_TAG_STRUCT_TIM_INFO",
        StructP2pNoaInfo = 69 => "WMI_TLV_TAG_STRUCT_P2P_NOA_INFO",
        StructStatsEvent = 70 => "WMI_TLV_TAG_STRUCT_STATS_EVENT",
        StructAvoidFreqRangesEvent = 71 => "WMI_TLV_TAG_STRUCT_AVOID_FREQ_RANGES_EVENT",
        StructAvoidFreqRangeDesc = 72 => "WMI_TLV_TAG_STRUCT_AVOID_FREQ_RANGE_DESC",
        StructGtkRekeyFailEvent = 73 => "WMI_TLV_TAG_STRUCT_GTK_REKEY_FAIL_EVENT",
        StructInitCmd = 74 => "WMI_TLV_TAG_STRUCT_INIT_CMD",
        StructResourceConfig = 75 => "WMI_TLV_TAG_STRUCT_RESOURCE_CONFIG",
        StructWlanHostMemoryChunk = 76 => "WMI_TLV_TAG_STRUCT_WLAN_HOST_MEMORY_CHUNK",
        StructStartScanCmd = 77 => "WMI_TLV_TAG_STRUCT_START_SCAN_CMD",
        StructStopScanCmd = 78 => "WMI_TLV_TAG_STRUCT_STOP_SCAN_CMD",
        StructScanChanListCmd = 79 => "WMI_TLV_TAG_STRUCT_SCAN_CHAN_LIST_CMD",
        StructChannel = 80 => "WMI_TLV_TAG_STRUCT_CHANNEL",
        StructPdevSetRegdomainCmd = 81 => "WMI_TLV_TAG_STRUCT_PDEV_SET_REGDOMAIN_CMD",
        StructPdevSetParamCmd = 82 => "WMI_TLV_TAG_STRUCT_PDEV_SET_PARAM_CMD",
        StructPdevSetWmmParamsCmd = 83 => "WMI_TLV_TAG_STRUCT_PDEV_SET_WMM_PARAMS_CMD",
        StructWmmParams = 84 => "WMI_TLV_TAG_STRUCT_WMM_PARAMS",
        StructPdevSetQuietCmd = 85 => "WMI_TLV_TAG_STRUCT_PDEV_SET_QUIET_CMD",
        StructVdevCreateCmd = 86 => "WMI_TLV_TAG_STRUCT_VDEV_CREATE_CMD",
        StructVdevDeleteCmd = 87 => "WMI_TLV_TAG_STRUCT_VDEV_DELETE_CMD",
        StructVdevStartRequestCmd = 88 => "WMI_TLV_TAG_STRUCT_VDEV_START_REQUEST_CMD",
        StructP2pNoaDescriptor = 89 => "WMI_TLV_TAG_STRUCT_P2P_NOA_DESCRIPTOR",
        StructP2pGoSetBeaconIe = 90 => "WMI_TLV_TAG_STRUCT_P2P_GO_SET_BEACON_IE",
        StructGtkOffloadCmd = 91 => "WMI_TLV_TAG_STRUCT_GTK_OFFLOAD_CMD",
        StructVdevUpCmd = 92 => "WMI_TLV_TAG_STRUCT_VDEV_UP_CMD",
        StructVdevStopCmd = 93 => "WMI_TLV_TAG_STRUCT_VDEV_STOP_CMD",
        StructVdevDownCmd = 94 => "WMI_TLV_TAG_STRUCT_VDEV_DOWN_CMD",
        StructVdevSetParamCmd = 95 => "WMI_TLV_TAG_STRUCT_VDEV_SET_PARAM_CMD",
        StructVdevInstallKeyCmd = 96 => "WMI_TLV_TAG_STRUCT_VDEV_INSTALL_KEY_CMD",
        StructPeerCreateCmd = 97 => "WMI_TLV_TAG_STRUCT_PEER_CREATE_CMD",
        StructPeerDeleteCmd = 98 => "WMI_TLV_TAG_STRUCT_PEER_DELETE_CMD",
        StructPeerFlushTidsCmd = 99 => "WMI_TLV_TAG_STRUCT_PEER_FLUSH_TIDS_CMD",
        StructPeerSetParamCmd = 100 => "WMI_TLV_TAG_STRUCT_PEER_SET_PARAM_CMD",
        StructPeerAssocCompleteCmd = 101 => "WMI_TLV_TAG_STRUCT_PEER_ASSOC_COMPLETE_CMD",
        StructVhtRateSet = 102 => "WMI_TLV_TAG_STRUCT_VHT_RATE_SET",
        StructBcnTmplCmd = 103 => "WMI_TLV_TAG_STRUCT_BCN_TMPL_CMD",
        StructPrbTmplCmd = 104 => "WMI_TLV_TAG_STRUCT_PRB_TMPL_CMD",
        StructBcnPrbInfo = 105 => "WMI_TLV_TAG_STRUCT_BCN_PRB_INFO",
        StructPeerTidAddbaCmd = 106 => "WMI_TLV_TAG_STRUCT_PEER_TID_ADDBA_CMD",
        StructPeerTidDelbaCmd = 107 => "WMI_TLV_TAG_STRUCT_PEER_TID_DELBA_CMD",
        StructStaPowersaveModeCmd = 108 => "WMI_TLV_TAG_STRUCT_STA_POWERSAVE_MODE_CMD",
        StructStaPowersaveParamCmd = 109 => "WMI_TLV_TAG_STRUCT_STA_POWERSAVE_PARAM_CMD",
        StructStaDtimPsMethodCmd = 110 => "WMI_TLV_TAG_STRUCT_STA_DTIM_PS_METHOD_CMD",
        StructRoamScanMode = 111 => "WMI_TLV_TAG_STRUCT_ROAM_SCAN_MODE",
        StructRoamScanRssiThreshold = 112 => "WMI_TLV_TAG_STRUCT_ROAM_SCAN_RSSI_THRESHOLD",
        StructRoamScanPeriod = 113 => "WMI_TLV_TAG_STRUCT_ROAM_SCAN_PERIOD",
        StructRoamScanRssiChangeThreshold = 114 => "WMI_TLV_TAG_STRUCT_ROAM_SCAN_RSSI_CHANGE_THRESHOLD",
        StructPdevSuspendCmd = 115 => "WMI_TLV_TAG_STRUCT_PDEV_SUSPEND_CMD",
        StructPdevResumeCmd = 116 => "WMI_TLV_TAG_STRUCT_PDEV_RESUME_CMD",
        StructAddBcnFilterCmd = 117 => "WMI_TLV_TAG_STRUCT_ADD_BCN_FILTER_CMD",
        StructRmvBcnFilterCmd = 118 => "WMI_TLV_TAG_STRUCT_RMV_BCN_FILTER_CMD",
        StructWowEnableCmd = 119 => "WMI_TLV_TAG_STRUCT_WOW_ENABLE_CMD",
        StructWowHostwakeupFromSleepCmd = 120 => "WMI_TLV_TAG_STRUCT_WOW_HOSTWAKEUP_FROM_SLEEP_CMD",
        StructStaUapsdAutoTrigCmd = 121 => "WMI_TLV_TAG_STRUCT_STA_UAPSD_AUTO_TRIG_CMD",
        StructStaUapsdAutoTrigParam = 122 => "WMI_TLV_TAG_STRUCT_STA_UAPSD_AUTO_TRIG_PARAM",
        StructSetArpNsOffloadCmd = 123 => "WMI_TLV_TAG_STRUCT_SET_ARP_NS_OFFLOAD_CMD",
        StructArpOffloadTuple = 124 => "WMI_TLV_TAG_STRUCT_ARP_OFFLOAD_TUPLE",
        StructNsOffloadTuple = 125 => "WMI_TLV_TAG_STRUCT_NS_OFFLOAD_TUPLE",
        StructFtmIntgCmd = 126 => "WMI_TLV_TAG_STRUCT_FTM_INTG_CMD",
        StructStaKeepaliveCmd = 127 => "WMI_TLV_TAG_STRUCT_STA_KEEPALIVE_CMD",
        StructStaKeepalveArpResponse = 128 => "WMI_TLV_TAG_STRUCT_STA_KEEPALVE_ARP_RESPONSE",
        StructP2pSetVendorIeDataCmd = 129 => "WMI_TLV_TAG_STRUCT_P2P_SET_VENDOR_IE_DATA_CMD",
        StructApPsPeerCmd = 130 => "WMI_TLV_TAG_STRUCT_AP_PS_PEER_CMD",
        StructPeerRateRetrySchedCmd = 131 => "WMI_TLV_TAG_STRUCT_PEER_RATE_RETRY_SCHED_CMD",
        StructWlanProfileTriggerCmd = 132 => "WMI_TLV_TAG_STRUCT_WLAN_PROFILE_TRIGGER_CMD",
        StructWlanProfileSetHistIntvlCmd = 133 => "WMI_TLV_TAG_STRUCT_WLAN_PROFILE_SET_HIST_INTVL_CMD",
        StructWlanProfileGetProfDataCmd = 134 => "WMI_TLV_TAG_STRUCT_WLAN_PROFILE_GET_PROF_DATA_CMD",
        StructWlanProfileEnableProfileIdCmd = 135 => "WMI_TLV_TAG_STRUCT_WLAN_PROFILE_ENABLE_PROFILE_ID_CMD",
        StructWowDelPatternCmd = 136 => "WMI_TLV_TAG_STRUCT_WOW_DEL_PATTERN_CMD",
        StructWowAddDelEvtCmd = 137 => "WMI_TLV_TAG_STRUCT_WOW_ADD_DEL_EVT_CMD",
        StructRttMeasreqHead = 138 => "WMI_TLV_TAG_STRUCT_RTT_MEASREQ_HEAD",
        StructRttMeasreqBody = 139 => "WMI_TLV_TAG_STRUCT_RTT_MEASREQ_BODY",
        StructRttTsfCmd = 140 => "WMI_TLV_TAG_STRUCT_RTT_TSF_CMD",
        StructVdevSpectralConfigureCmd = 141 => "WMI_TLV_TAG_STRUCT_VDEV_SPECTRAL_CONFIGURE_CMD",
        StructVdevSpectralEnableCmd = 142 => "WMI_TLV_TAG_STRUCT_VDEV_SPECTRAL_ENABLE_CMD",
        StructRequestStatsCmd = 143 => "WMI_TLV_TAG_STRUCT_REQUEST_STATS_CMD",
        StructNloConfigCmd = 144 => "WMI_TLV_TAG_STRUCT_NLO_CONFIG_CMD",
        StructNloConfiguredParameters = 145 => "WMI_TLV_TAG_STRUCT_NLO_CONFIGURED_PARAMETERS",
        StructCsaOffloadEnableCmd = 146 => "WMI_TLV_TAG_STRUCT_CSA_OFFLOAD_ENABLE_CMD",
        StructCsaOffloadChanswitchCmd = 147 => "WMI_TLV_TAG_STRUCT_CSA_OFFLOAD_CHANSWITCH_CMD",
        StructChatterSetModeCmd = 148 => "WMI_TLV_TAG_STRUCT_CHATTER_SET_MODE_CMD",
        StructEchoCmd = 149 => "WMI_TLV_TAG_STRUCT_ECHO_CMD",
        StructVdevSetKeepaliveCmd = 150 => "WMI_TLV_TAG_STRUCT_VDEV_SET_KEEPALIVE_CMD",
        StructVdevGetKeepaliveCmd = 151 => "WMI_TLV_TAG_STRUCT_VDEV_GET_KEEPALIVE_CMD",
        StructForceFwHangCmd = 152 => "WMI_TLV_TAG_STRUCT_FORCE_FW_HANG_CMD",
        StructGpioConfigCmd = 153 => "WMI_TLV_TAG_STRUCT_GPIO_CONFIG_CMD",
        StructGpioOutputCmd = 154 => "WMI_TLV_TAG_STRUCT_GPIO_OUTPUT_CMD",
        StructPeerAddWdsEntryCmd = 155 => "WMI_TLV_TAG_STRUCT_PEER_ADD_WDS_ENTRY_CMD",
        StructPeerRemoveWdsEntryCmd = 156 => "WMI_TLV_TAG_STRUCT_PEER_REMOVE_WDS_ENTRY_CMD",
        StructBcnTxHdr = 157 => "WMI_TLV_TAG_STRUCT_BCN_TX_HDR",
        StructBcnSendFromHostCmd = 158 => "WMI_TLV_TAG_STRUCT_BCN_SEND_FROM_HOST_CMD",
        StructMgmtTxHdr = 159 => "WMI_TLV_TAG_STRUCT_MGMT_TX_HDR",
        StructAddbaClearRespCmd = 160 => "WMI_TLV_TAG_STRUCT_ADDBA_CLEAR_RESP_CMD",
        StructAddbaSendCmd = 161 => "WMI_TLV_TAG_STRUCT_ADDBA_SEND_CMD",
        StructDelbaSendCmd = 162 => "WMI_TLV_TAG_STRUCT_DELBA_SEND_CMD",
        StructAddbaSetresponseCmd = 163 => "WMI_TLV_TAG_STRUCT_ADDBA_SETRESPONSE_CMD",
        StructSendSingleamsduCmd = 164 => "WMI_TLV_TAG_STRUCT_SEND_SINGLEAMSDU_CMD",
        StructPdevPktlogEnableCmd = 165 => "WMI_TLV_TAG_STRUCT_PDEV_PKTLOG_ENABLE_CMD",
        StructPdevPktlogDisableCmd = 166 => "WMI_TLV_TAG_STRUCT_PDEV_PKTLOG_DISABLE_CMD",
        StructPdevSetHtIeCmd = 167 => "WMI_TLV_TAG_STRUCT_PDEV_SET_HT_IE_CMD",
        StructPdevSetVhtIeCmd = 168 => "WMI_TLV_TAG_STRUCT_PDEV_SET_VHT_IE_CMD",
        StructPdevSetDscpTidMapCmd = 169 => "WMI_TLV_TAG_STRUCT_PDEV_SET_DSCP_TID_MAP_CMD",
        StructPdevGreenApPsEnableCmd = 170 => "WMI_TLV_TAG_STRUCT_PDEV_GREEN_AP_PS_ENABLE_CMD",
        StructPdevGetTpcConfigCmd = 171 => "WMI_TLV_TAG_STRUCT_PDEV_GET_TPC_CONFIG_CMD",
        StructPdevSetBaseMacaddrCmd = 172 => "WMI_TLV_TAG_STRUCT_PDEV_SET_BASE_MACADDR_CMD",
        StructPeerMcastGroupCmd = 173 => "WMI_TLV_TAG_STRUCT_PEER_MCAST_GROUP_CMD",
        StructRoamApProfile = 174 => "WMI_TLV_TAG_STRUCT_ROAM_AP_PROFILE",
        StructApProfile = 175 => "WMI_TLV_TAG_STRUCT_AP_PROFILE",
        StructScanSchPriorityTableCmd = 176 => "WMI_TLV_TAG_STRUCT_SCAN_SCH_PRIORITY_TABLE_CMD",
        StructPdevDfsEnableCmd = 177 => "WMI_TLV_TAG_STRUCT_PDEV_DFS_ENABLE_CMD",
        StructPdevDfsDisableCmd = 178 => "WMI_TLV_TAG_STRUCT_PDEV_DFS_DISABLE_CMD",
        StructWowAddPatternCmd = 179 => "WMI_TLV_TAG_STRUCT_WOW_ADD_PATTERN_CMD",
        StructWowBitmapPatternT = 180 => "WMI_TLV_TAG_STRUCT_WOW_BITMAP_PATTERN_T",
        StructWowIpv4SyncPatternT = 181 => "WMI_TLV_TAG_STRUCT_WOW_IPV4_SYNC_PATTERN_T",
        StructWowIpv6SyncPatternT = 182 => "WMI_TLV_TAG_STRUCT_WOW_IPV6_SYNC_PATTERN_T",
        StructWowMagicPatternCmd = 183 => "WMI_TLV_TAG_STRUCT_WOW_MAGIC_PATTERN_CMD",
        StructScanUpdateRequestCmd = 184 => "WMI_TLV_TAG_STRUCT_SCAN_UPDATE_REQUEST_CMD",
        StructChatterPktCoalescingFilter = 185 => "WMI_TLV_TAG_STRUCT_CHATTER_PKT_COALESCING_FILTER",
        StructChatterCoalescingAddFilterCmd = 186 => "WMI_TLV_TAG_STRUCT_CHATTER_COALESCING_ADD_FILTER_CMD",
        StructChatterCoalescingDeleteFilterCmd = 187 => "WMI_TLV_TAG_STRUCT_CHATTER_COALESCING_DELETE_FILTER_CMD",
        StructChatterCoalescingQueryCmd = 188 => "WMI_TLV_TAG_STRUCT_CHATTER_COALESCING_QUERY_CMD",
        StructTxbfCmd = 189 => "WMI_TLV_TAG_STRUCT_TXBF_CMD",
        StructDebugLogConfigCmd = 190 => "WMI_TLV_TAG_STRUCT_DEBUG_LOG_CONFIG_CMD",
        StructNloEvent = 191 => "WMI_TLV_TAG_STRUCT_NLO_EVENT",
        StructChatterQueryReplyEvent = 192 => "WMI_TLV_TAG_STRUCT_CHATTER_QUERY_REPLY_EVENT",
        StructUploadHHdr = 193 => "WMI_TLV_TAG_STRUCT_UPLOAD_H_HDR",
        StructCaptureHEventHdr = 194 => "WMI_TLV_TAG_STRUCT_CAPTURE_H_EVENT_HDR",
        StructVdevWnmSleepmodeCmd = 195 => "WMI_TLV_TAG_STRUCT_VDEV_WNM_SLEEPMODE_CMD",
        StructVdevIpsecNatkeepaliveFilterCmd = 196 => "WMI_TLV_TAG_STRUCT_VDEV_IPSEC_NATKEEPALIVE_FILTER_CMD",
        StructVdevWmmAddtsCmd = 197 => "WMI_TLV_TAG_STRUCT_VDEV_WMM_ADDTS_CMD",
        StructVdevWmmDeltsCmd = 198 => "WMI_TLV_TAG_STRUCT_VDEV_WMM_DELTS_CMD",
        StructVdevSetWmmParamsCmd = 199 => "WMI_TLV_TAG_STRUCT_VDEV_SET_WMM_PARAMS_CMD",
        StructTdlsSetStateCmd = 200 => "WMI_TLV_TAG_STRUCT_TDLS_SET_STATE_CMD",
        StructTdlsPeerUpdateCmd = 201 => "WMI_TLV_TAG_STRUCT_TDLS_PEER_UPDATE_CMD",
        StructTdlsPeerEvent = 202 => "WMI_TLV_TAG_STRUCT_TDLS_PEER_EVENT",
        StructTdlsPeerCapabilities = 203 => "WMI_TLV_TAG_STRUCT_TDLS_PEER_CAPABILITIES",
        StructVdevMccSetTbttModeCmd = 204 => "WMI_TLV_TAG_STRUCT_VDEV_MCC_SET_TBTT_MODE_CMD",
        StructRoamChanList = 205 => "WMI_TLV_TAG_STRUCT_ROAM_CHAN_LIST",
        StructVdevMccBcnIntvlChangeEvent = 206 => "WMI_TLV_TAG_STRUCT_VDEV_MCC_BCN_INTVL_CHANGE_EVENT",
        StructResmgrAdaptiveOcsCmd = 207 => "WMI_TLV_TAG_STRUCT_RESMGR_ADAPTIVE_OCS_CMD",
        StructResmgrSetChanTimeQuotaCmd = 208 => "WMI_TLV_TAG_STRUCT_RESMGR_SET_CHAN_TIME_QUOTA_CMD",
        StructResmgrSetChanLatencyCmd = 209 => "WMI_TLV_TAG_STRUCT_RESMGR_SET_CHAN_LATENCY_CMD",
        StructBaReqSsnCmd = 210 => "WMI_TLV_TAG_STRUCT_BA_REQ_SSN_CMD",
        StructBaRspSsnEvent = 211 => "WMI_TLV_TAG_STRUCT_BA_RSP_SSN_EVENT",
        StructStaSmpsForceModeCmd = 212 => "WMI_TLV_TAG_STRUCT_STA_SMPS_FORCE_MODE_CMD",
        StructSetMcastbcastFilterCmd = 213 => "WMI_TLV_TAG_STRUCT_SET_MCASTBCAST_FILTER_CMD",
        StructP2pSetOpppsCmd = 214 => "WMI_TLV_TAG_STRUCT_P2P_SET_OPPPS_CMD",
        StructP2pSetNoaCmd = 215 => "WMI_TLV_TAG_STRUCT_P2P_SET_NOA_CMD",
        StructBaReqSsnCmdSubStructParam = 216 => "WMI_TLV_TAG_STRUCT_BA_REQ_SSN_CMD_SUB_STRUCT_PARAM",
        StructBaReqSsnEventSubStructParam = 217 => "WMI_TLV_TAG_STRUCT_BA_REQ_SSN_EVENT_SUB_STRUCT_PARAM",
        StructStaSmpsParamCmd = 218 => "WMI_TLV_TAG_STRUCT_STA_SMPS_PARAM_CMD",
        StructVdevSetGtxParamsCmd = 219 => "WMI_TLV_TAG_STRUCT_VDEV_SET_GTX_PARAMS_CMD",
        StructMccSchedTrafficStatsCmd = 220 => "WMI_TLV_TAG_STRUCT_MCC_SCHED_TRAFFIC_STATS_CMD",
        StructMccSchedStaTrafficStats = 221 => "WMI_TLV_TAG_STRUCT_MCC_SCHED_STA_TRAFFIC_STATS",
        StructOffloadBcnTxStatusEvent = 222 => "WMI_TLV_TAG_STRUCT_OFFLOAD_BCN_TX_STATUS_EVENT",
        StructP2pNoaEvent = 223 => "WMI_TLV_TAG_STRUCT_P2P_NOA_EVENT",
        StructHbSetEnableCmd = 224 => "WMI_TLV_TAG_STRUCT_HB_SET_ENABLE_CMD",
        StructHbSetTcpParamsCmd = 225 => "WMI_TLV_TAG_STRUCT_HB_SET_TCP_PARAMS_CMD",
        StructHbSetTcpPktFilterCmd = 226 => "WMI_TLV_TAG_STRUCT_HB_SET_TCP_PKT_FILTER_CMD",
        StructHbSetUdpParamsCmd = 227 => "WMI_TLV_TAG_STRUCT_HB_SET_UDP_PARAMS_CMD",
        StructHbSetUdpPktFilterCmd = 228 => "WMI_TLV_TAG_STRUCT_HB_SET_UDP_PKT_FILTER_CMD",
        StructHbIndEvent = 229 => "WMI_TLV_TAG_STRUCT_HB_IND_EVENT",
        StructTxPauseEvent = 230 => "WMI_TLV_TAG_STRUCT_TX_PAUSE_EVENT",
        StructRfkillEvent = 231 => "WMI_TLV_TAG_STRUCT_RFKILL_EVENT",
        StructDfsRadarEvent = 232 => "WMI_TLV_TAG_STRUCT_DFS_RADAR_EVENT",
        StructDfsPhyerrFilterEnaCmd = 233 => "WMI_TLV_TAG_STRUCT_DFS_PHYERR_FILTER_ENA_CMD",
        StructDfsPhyerrFilterDisCmd = 234 => "WMI_TLV_TAG_STRUCT_DFS_PHYERR_FILTER_DIS_CMD",
        StructBatchScanResultScanList = 235 => "WMI_TLV_TAG_STRUCT_BATCH_SCAN_RESULT_SCAN_LIST",
        StructBatchScanResultNetworkInfo = 236 => "WMI_TLV_TAG_STRUCT_BATCH_SCAN_RESULT_NETWORK_INFO",
        StructBatchScanEnableCmd = 237 => "WMI_TLV_TAG_STRUCT_BATCH_SCAN_ENABLE_CMD",
        StructBatchScanDisableCmd = 238 => "WMI_TLV_TAG_STRUCT_BATCH_SCAN_DISABLE_CMD",
        StructBatchScanTriggerResultCmd = 239 => "WMI_TLV_TAG_STRUCT_BATCH_SCAN_TRIGGER_RESULT_CMD",
        StructBatchScanEnabledEvent = 240 => "WMI_TLV_TAG_STRUCT_BATCH_SCAN_ENABLED_EVENT",
        StructBatchScanResultEvent = 241 => "WMI_TLV_TAG_STRUCT_BATCH_SCAN_RESULT_EVENT",
        StructVdevPlmreqStartCmd = 242 => "WMI_TLV_TAG_STRUCT_VDEV_PLMREQ_START_CMD",
        StructVdevPlmreqStopCmd = 243 => "WMI_TLV_TAG_STRUCT_VDEV_PLMREQ_STOP_CMD",
        StructThermalMgmtCmd = 244 => "WMI_TLV_TAG_STRUCT_THERMAL_MGMT_CMD",
        StructThermalMgmtEvent = 245 => "WMI_TLV_TAG_STRUCT_THERMAL_MGMT_EVENT",
        StructPeerInfoReqCmd = 246 => "WMI_TLV_TAG_STRUCT_PEER_INFO_REQ_CMD",
        StructPeerInfoEvent = 247 => "WMI_TLV_TAG_STRUCT_PEER_INFO_EVENT",
        StructPeerInfo = 248 => "WMI_TLV_TAG_STRUCT_PEER_INFO",
        StructPeerTxFailCntThrEvent = 249 => "WMI_TLV_TAG_STRUCT_PEER_TX_FAIL_CNT_THR_EVENT",
        StructRmcSetModeCmd = 250 => "WMI_TLV_TAG_STRUCT_RMC_SET_MODE_CMD",
        StructRmcSetActionPeriodCmd = 251 => "WMI_TLV_TAG_STRUCT_RMC_SET_ACTION_PERIOD_CMD",
        StructRmcConfigCmd = 252 => "WMI_TLV_TAG_STRUCT_RMC_CONFIG_CMD",
        StructMhfOffloadSetModeCmd = 253 => "WMI_TLV_TAG_STRUCT_MHF_OFFLOAD_SET_MODE_CMD",
        StructMhfOffloadPlumbRoutingTableCmd = 254 => "WMI_TLV_TAG_STRUCT_MHF_OFFLOAD_PLUMB_ROUTING_TABLE_CMD",
        StructAddProactiveArpRspPatternCmd = 255 => "WMI_TLV_TAG_STRUCT_ADD_PROACTIVE_ARP_RSP_PATTERN_CMD",
        StructDelProactiveArpRspPatternCmd = 256 => "WMI_TLV_TAG_STRUCT_DEL_PROACTIVE_ARP_RSP_PATTERN_CMD",
        StructNanCmdParam = 257 => "WMI_TLV_TAG_STRUCT_NAN_CMD_PARAM",
        StructNanEventHdr = 258 => "WMI_TLV_TAG_STRUCT_NAN_EVENT_HDR",
        StructPdevL1ssTrackEvent = 259 => "WMI_TLV_TAG_STRUCT_PDEV_L1SS_TRACK_EVENT",
        StructDiagDataContainerEvent = 260 => "WMI_TLV_TAG_STRUCT_DIAG_DATA_CONTAINER_EVENT",
        StructModemPowerStateCmdParam = 261 => "WMI_TLV_TAG_STRUCT_MODEM_POWER_STATE_CMD_PARAM",
        StructPeerGetEstimatedLinkspeedCmd = 262 => "WMI_TLV_TAG_STRUCT_PEER_GET_ESTIMATED_LINKSPEED_CMD",
        StructPeerEstimatedLinkspeedEvent = 263 => "WMI_TLV_TAG_STRUCT_PEER_ESTIMATED_LINKSPEED_EVENT",
        StructAggrStateTrigEvent = 264 => "WMI_TLV_TAG_STRUCT_AGGR_STATE_TRIG_EVENT",
        StructMhfOffloadRoutingTableEntry = 265 => "WMI_TLV_TAG_STRUCT_MHF_OFFLOAD_ROUTING_TABLE_ENTRY",
        StructRoamScanCmd = 266 => "WMI_TLV_TAG_STRUCT_ROAM_SCAN_CMD",
        StructReqStatsExtCmd = 267 => "WMI_TLV_TAG_STRUCT_REQ_STATS_EXT_CMD",
        StructStatsExtEvent = 268 => "WMI_TLV_TAG_STRUCT_STATS_EXT_EVENT",
        StructObssScanEnableCmd = 269 => "WMI_TLV_TAG_STRUCT_OBSS_SCAN_ENABLE_CMD",
        StructObssScanDisableCmd = 270 => "WMI_TLV_TAG_STRUCT_OBSS_SCAN_DISABLE_CMD",
        StructOffloadPrbRspTxStatusEvent = 271 => "WMI_TLV_TAG_STRUCT_OFFLOAD_PRB_RSP_TX_STATUS_EVENT",
        StructPdevSetLedConfigCmd = 272 => "WMI_TLV_TAG_STRUCT_PDEV_SET_LED_CONFIG_CMD",
        StructHostAutoShutdownCfgCmd = 273 => "WMI_TLV_TAG_STRUCT_HOST_AUTO_SHUTDOWN_CFG_CMD",
        StructHostAutoShutdownEvent = 274 => "WMI_TLV_TAG_STRUCT_HOST_AUTO_SHUTDOWN_EVENT",
        StructUpdateWhalMibStatsEvent = 275 => "WMI_TLV_TAG_STRUCT_UPDATE_WHAL_MIB_STATS_EVENT",
        StructChanAvoidUpdateCmdParam = 276 => "WMI_TLV_TAG_STRUCT_CHAN_AVOID_UPDATE_CMD_PARAM",
        StructWowAcerIoacPktPatternT = 277 => "WMI_TLV_TAG_STRUCT_WOW_ACER_IOAC_PKT_PATTERN_T",
        StructWowAcerIoacTmrPatternT = 278 => "WMI_TLV_TAG_STRUCT_WOW_ACER_IOAC_TMR_PATTERN_T",
        StructWowIoacAddKeepaliveCmd = 279 => "WMI_TLV_TAG_STRUCT_WOW_IOAC_ADD_KEEPALIVE_CMD",
        StructWowIoacDelKeepaliveCmd = 280 => "WMI_TLV_TAG_STRUCT_WOW_IOAC_DEL_KEEPALIVE_CMD",
        StructWowIoacKeepaliveT = 281 => "WMI_TLV_TAG_STRUCT_WOW_IOAC_KEEPALIVE_T",
        StructWowAcerIoacAddPatternCmd = 282 => "WMI_TLV_TAG_STRUCT_WOW_ACER_IOAC_ADD_PATTERN_CMD",
        StructWowAcerIoacDelPatternCmd = 283 => "WMI_TLV_TAG_STRUCT_WOW_ACER_IOAC_DEL_PATTERN_CMD",
        StructStartLinkStatsCmd = 284 => "WMI_TLV_TAG_STRUCT_START_LINK_STATS_CMD",
        StructClearLinkStatsCmd = 285 => "WMI_TLV_TAG_STRUCT_CLEAR_LINK_STATS_CMD",
        StructRequestLinkStatsCmd = 286 => "WMI_TLV_TAG_STRUCT_REQUEST_LINK_STATS_CMD",
        StructIfaceLinkStatsEvent = 287 => "WMI_TLV_TAG_STRUCT_IFACE_LINK_STATS_EVENT",
        StructRadioLinkStatsEvent = 288 => "WMI_TLV_TAG_STRUCT_RADIO_LINK_STATS_EVENT",
        StructPeerStatsEvent = 289 => "WMI_TLV_TAG_STRUCT_PEER_STATS_EVENT",
        StructChannelStats = 290 => "WMI_TLV_TAG_STRUCT_CHANNEL_STATS",
        StructRadioLinkStats = 291 => "WMI_TLV_TAG_STRUCT_RADIO_LINK_STATS",
        StructRateStats = 292 => "WMI_TLV_TAG_STRUCT_RATE_STATS",
        StructPeerLinkStats = 293 => "WMI_TLV_TAG_STRUCT_PEER_LINK_STATS",
        StructWmmAcStats = 294 => "WMI_TLV_TAG_STRUCT_WMM_AC_STATS",
        StructIfaceLinkStats = 295 => "WMI_TLV_TAG_STRUCT_IFACE_LINK_STATS",
        StructLpiMgmtSnoopingConfigCmd = 296 => "WMI_TLV_TAG_STRUCT_LPI_MGMT_SNOOPING_CONFIG_CMD",
        StructLpiStartScanCmd = 297 => "WMI_TLV_TAG_STRUCT_LPI_START_SCAN_CMD",
        StructLpiStopScanCmd = 298 => "WMI_TLV_TAG_STRUCT_LPI_STOP_SCAN_CMD",
        StructLpiResultEvent = 299 => "WMI_TLV_TAG_STRUCT_LPI_RESULT_EVENT",
        StructPeerStateEvent = 300 => "WMI_TLV_TAG_STRUCT_PEER_STATE_EVENT",
        StructExtscanBucketCmd = 301 => "WMI_TLV_TAG_STRUCT_EXTSCAN_BUCKET_CMD",
        StructExtscanBucketChannelEvent = 302 => "WMI_TLV_TAG_STRUCT_EXTSCAN_BUCKET_CHANNEL_EVENT",
        StructExtscanStartCmd = 303 => "WMI_TLV_TAG_STRUCT_EXTSCAN_START_CMD",
        StructExtscanStopCmd = 304 => "WMI_TLV_TAG_STRUCT_EXTSCAN_STOP_CMD",
        StructExtscanConfigureWlanChangeMonitorCmd = 305 => "WMI_TLV_TAG_STRUCT_EXTSCAN_CONFIGURE_WLAN_CHANGE_MONITOR_CMD",
        StructExtscanWlanChangeBssidParamCmd = 306 => "WMI_TLV_TAG_STRUCT_EXTSCAN_WLAN_CHANGE_BSSID_PARAM_CMD",
        StructExtscanConfigureHotlistMonitorCmd = 307 => "WMI_TLV_TAG_STRUCT_EXTSCAN_CONFIGURE_HOTLIST_MONITOR_CMD",
        StructExtscanGetCachedResultsCmd = 308 => "WMI_TLV_TAG_STRUCT_EXTSCAN_GET_CACHED_RESULTS_CMD",
        StructExtscanGetWlanChangeResultsCmd = 309 => "WMI_TLV_TAG_STRUCT_EXTSCAN_GET_WLAN_CHANGE_RESULTS_CMD",
        StructExtscanSetCapabilitiesCmd = 310 => "WMI_TLV_TAG_STRUCT_EXTSCAN_SET_CAPABILITIES_CMD",
        StructExtscanGetCapabilitiesCmd = 311 => "WMI_TLV_TAG_STRUCT_EXTSCAN_GET_CAPABILITIES_CMD",
        StructExtscanOperationEvent = 312 => "WMI_TLV_TAG_STRUCT_EXTSCAN_OPERATION_EVENT",
        StructExtscanStartStopEvent = 313 => "WMI_TLV_TAG_STRUCT_EXTSCAN_START_STOP_EVENT",
        StructExtscanTableUsageEvent = 314 => "WMI_TLV_TAG_STRUCT_EXTSCAN_TABLE_USAGE_EVENT",
        StructExtscanWlanDescriptorEvent = 315 => "WMI_TLV_TAG_STRUCT_EXTSCAN_WLAN_DESCRIPTOR_EVENT",
        StructExtscanRssiInfoEvent = 316 => "WMI_TLV_TAG_STRUCT_EXTSCAN_RSSI_INFO_EVENT",
        StructExtscanCachedResultsEvent = 317 => "WMI_TLV_TAG_STRUCT_EXTSCAN_CACHED_RESULTS_EVENT",
        StructExtscanWlanChangeResultsEvent = 318 => "WMI_TLV_TAG_STRUCT_EXTSCAN_WLAN_CHANGE_RESULTS_EVENT",
        StructExtscanWlanChangeResultBssidEvent = 319 => "WMI_TLV_TAG_STRUCT_EXTSCAN_WLAN_CHANGE_RESULT_BSSID_EVENT",
        StructExtscanHotlistMatchEvent = 320 => "WMI_TLV_TAG_STRUCT_EXTSCAN_HOTLIST_MATCH_EVENT",
        StructExtscanCapabilitiesEvent = 321 => "WMI_TLV_TAG_STRUCT_EXTSCAN_CAPABILITIES_EVENT",
        StructExtscanCacheCapabilitiesEvent = 322 => "WMI_TLV_TAG_STRUCT_EXTSCAN_CACHE_CAPABILITIES_EVENT",
        StructExtscanWlanChangeMonitorCapabilitiesEvent = 323 => "WMI_TLV_TAG_STRUCT_EXTSCAN_WLAN_CHANGE_MONITOR_CAPABILITIES_EVENT",
        StructExtscanHotlistMonitorCapabilitiesEvent = 324 => "WMI_TLV_TAG_STRUCT_EXTSCAN_HOTLIST_MONITOR_CAPABILITIES_EVENT",
        StructD0WowEnableDisableCmd = 325 => "WMI_TLV_TAG_STRUCT_D0_WOW_ENABLE_DISABLE_CMD",
        StructD0WowDisableAckEvent = 326 => "WMI_TLV_TAG_STRUCT_D0_WOW_DISABLE_ACK_EVENT",
        StructUnitTestCmd = 327 => "WMI_TLV_TAG_STRUCT_UNIT_TEST_CMD",
        StructRoamOffloadTlvParam = 328 => "WMI_TLV_TAG_STRUCT_ROAM_OFFLOAD_TLV_PARAM",
        StructRoam11iOffloadTlvParam = 329 => "WMI_TLV_TAG_STRUCT_ROAM_11I_OFFLOAD_TLV_PARAM",
        StructRoam11rOffloadTlvParam = 330 => "WMI_TLV_TAG_STRUCT_ROAM_11R_OFFLOAD_TLV_PARAM",
        StructRoamEseOffloadTlvParam = 331 => "WMI_TLV_TAG_STRUCT_ROAM_ESE_OFFLOAD_TLV_PARAM",
        StructRoamSynchEvent = 332 => "WMI_TLV_TAG_STRUCT_ROAM_SYNCH_EVENT",
        StructRoamSynchComplete = 333 => "WMI_TLV_TAG_STRUCT_ROAM_SYNCH_COMPLETE",
        StructExtwowEnableCmd = 334 => "WMI_TLV_TAG_STRUCT_EXTWOW_ENABLE_CMD",
        StructExtwowSetAppType1ParamsCmd = 335 => "WMI_TLV_TAG_STRUCT_EXTWOW_SET_APP_TYPE1_PARAMS_CMD",
        StructExtwowSetAppType2ParamsCmd = 336 => "WMI_TLV_TAG_STRUCT_EXTWOW_SET_APP_TYPE2_PARAMS_CMD",
        StructLpiStatusEvent = 337 => "WMI_TLV_TAG_STRUCT_LPI_STATUS_EVENT",
        StructLpiHandoffEvent = 338 => "WMI_TLV_TAG_STRUCT_LPI_HANDOFF_EVENT",
        StructVdevRateStatsEvent = 339 => "WMI_TLV_TAG_STRUCT_VDEV_RATE_STATS_EVENT",
        StructVdevRateHtInfo = 340 => "WMI_TLV_TAG_STRUCT_VDEV_RATE_HT_INFO",
        StructRicRequest = 341 => "WMI_TLV_TAG_STRUCT_RIC_REQUEST",
        StructPdevGetTemperatureCmd = 342 => "WMI_TLV_TAG_STRUCT_PDEV_GET_TEMPERATURE_CMD",
        StructPdevTemperatureEvent = 343 => "WMI_TLV_TAG_STRUCT_PDEV_TEMPERATURE_EVENT",
        StructSetDhcpServerOffloadCmd = 344 => "WMI_TLV_TAG_STRUCT_SET_DHCP_SERVER_OFFLOAD_CMD",
        StructTpcChainmaskConfigCmd = 345 => "WMI_TLV_TAG_STRUCT_TPC_CHAINMASK_CONFIG_CMD",
        StructRicTspec = 346 => "WMI_TLV_TAG_STRUCT_RIC_TSPEC",
        StructTpcChainmaskConfig = 347 => "WMI_TLV_TAG_STRUCT_TPC_CHAINMASK_CONFIG",
        StructIpaOffloadCmd = 348 => "WMI_TLV_TAG_STRUCT_IPA_OFFLOAD_CMD",
        StructScanProbReqOuiCmd = 349 => "WMI_TLV_TAG_STRUCT_SCAN_PROB_REQ_OUI_CMD",
        StructKeyMaterial = 350 => "WMI_TLV_TAG_STRUCT_KEY_MATERIAL",
        StructTdlsSetOffchanModeCmd = 351 => "WMI_TLV_TAG_STRUCT_TDLS_SET_OFFCHAN_MODE_CMD",
        StructSetLedFlashingCmd = 352 => "WMI_TLV_TAG_STRUCT_SET_LED_FLASHING_CMD",
        StructMdnsOffloadCmd = 353 => "WMI_TLV_TAG_STRUCT_MDNS_OFFLOAD_CMD",
        StructMdnsSetFqdnCmd = 354 => "WMI_TLV_TAG_STRUCT_MDNS_SET_FQDN_CMD",
        StructMdnsSetRespCmd = 355 => "WMI_TLV_TAG_STRUCT_MDNS_SET_RESP_CMD",
        StructMdnsGetStatsCmd = 356 => "WMI_TLV_TAG_STRUCT_MDNS_GET_STATS_CMD",
        StructMdnsStatsEvent = 357 => "WMI_TLV_TAG_STRUCT_MDNS_STATS_EVENT",
        StructRoamInvokeCmd = 358 => "WMI_TLV_TAG_STRUCT_ROAM_INVOKE_CMD",
        StructPdevResumeEvent = 359 => "WMI_TLV_TAG_STRUCT_PDEV_RESUME_EVENT",
        StructPdevSetAntennaDiversityCmd = 360 => "WMI_TLV_TAG_STRUCT_PDEV_SET_ANTENNA_DIVERSITY_CMD",
        StructSapOflEnableCmd = 361 => "WMI_TLV_TAG_STRUCT_SAP_OFL_ENABLE_CMD",
        StructSapOflAddStaEvent = 362 => "WMI_TLV_TAG_STRUCT_SAP_OFL_ADD_STA_EVENT",
        StructSapOflDelStaEvent = 363 => "WMI_TLV_TAG_STRUCT_SAP_OFL_DEL_STA_EVENT",
        StructApfindCmdParam = 364 => "WMI_TLV_TAG_STRUCT_APFIND_CMD_PARAM",
        StructApfindEventHdr = 365 => "WMI_TLV_TAG_STRUCT_APFIND_EVENT_HDR",
        Max = 366 => "WMI_TLV_TAG_MAX",
    }
}

id_registry! {
    /// pdev parameter ids (`pdev-set-param`).
    pub enum PdevParam(u32) {
        TxChainMask = 1 => "WMI_TLV_PDEV_PARAM_TX_CHAIN_MASK",
        RxChainMask = 2 => "WMI_TLV_PDEV_PARAM_RX_CHAIN_MASK",
        TxpowerLimit2g = 3 => "WMI_TLV_PDEV_PARAM_TXPOWER_LIMIT2G",
        TxpowerLimit5g = 4 => "WMI_TLV_PDEV_PARAM_TXPOWER_LIMIT5G",
        TxpowerScale = 5 => "WMI_TLV_PDEV_PARAM_TXPOWER_SCALE",
        BeaconGenMode = 6 => "WMI_TLV_PDEV_PARAM_BEACON_GEN_MODE",
        BeaconTxMode = 7 => "WMI_TLV_PDEV_PARAM_BEACON_TX_MODE",
        ResmgrOffchanMode = 8 => "WMI_TLV_PDEV_PARAM_RESMGR_OFFCHAN_MODE",
        ProtectionMode = 9 => "WMI_TLV_PDEV_PARAM_PROTECTION_MODE",
        DynamicBw = 10 => "WMI_TLV_PDEV_PARAM_DYNAMIC_BW",
        NonAggSwRetryTh = 11 => "WMI_TLV_PDEV_PARAM_NON_AGG_SW_RETRY_TH",
        AggSwRetryTh = 12 => "WMI_TLV_PDEV_PARAM_AGG_SW_RETRY_TH",
        StaKickoutTh = 13 => "WMI_TLV_PDEV_PARAM_STA_KICKOUT_TH",
        AcAggrsizeScaling = 14 => "WMI_TLV_PDEV_PARAM_AC_AGGRSIZE_SCALING",
        LtrEnable = 15 => "WMI_TLV_PDEV_PARAM_LTR_ENABLE",
        LtrAcLatencyBe = 16 => "WMI_TLV_PDEV_PARAM_LTR_AC_LATENCY_BE",
        LtrAcLatencyBk = 17 => "WMI_TLV_PDEV_PARAM_LTR_AC_LATENCY_BK",
        LtrAcLatencyVi = 18 => "WMI_TLV_PDEV_PARAM_LTR_AC_LATENCY_VI",
        LtrAcLatencyVo = 19 => "WMI_TLV_PDEV_PARAM_LTR_AC_LATENCY_VO",
        LtrAcLatencyTimeout = 20 => "WMI_TLV_PDEV_PARAM_LTR_AC_LATENCY_TIMEOUT",
        LtrSleepOverride = 21 => "WMI_TLV_PDEV_PARAM_LTR_SLEEP_OVERRIDE",
        LtrRxOverride = 22 => "WMI_TLV_PDEV_PARAM_LTR_RX_OVERRIDE",
        LtrTxActivityTimeout = 23 => "WMI_TLV_PDEV_PARAM_LTR_TX_ACTIVITY_TIMEOUT",
        L1ssEnable = 24 => "WMI_TLV_PDEV_PARAM_L1SS_ENABLE",
        DsleepEnable = 25 => "WMI_TLV_PDEV_PARAM_DSLEEP_ENABLE",
        PcielpTxbufFlush = 26 => "WMI_TLV_PDEV_PARAM_PCIELP_TXBUF_FLUSH",
        PcielpTxbufWatermark = 27 => "WMI_TLV_PDEV_PARAM_PCIELP_TXBUF_WATERMARK",
        PcielpTxbufTmoEn = 28 => "WMI_TLV_PDEV_PARAM_PCIELP_TXBUF_TMO_EN",
        PcielpTxbufTmoValue = 29 => "WMI_TLV_PDEV_PARAM_PCIELP_TXBUF_TMO_VALUE",
        PdevStatsUpdatePeriod = 30 => "WMI_TLV_PDEV_PARAM_PDEV_STATS_UPDATE_PERIOD",
        VdevStatsUpdatePeriod = 31 => "WMI_TLV_PDEV_PARAM_VDEV_STATS_UPDATE_PERIOD",
        PeerStatsUpdatePeriod = 32 => "WMI_TLV_PDEV_PARAM_PEER_STATS_UPDATE_PERIOD",
        BcnfltStatsUpdatePeriod = 33 => "WMI_TLV_PDEV_PARAM_BCNFLT_STATS_UPDATE_PERIOD",
        PmfQos = 34 => "WMI_TLV_PDEV_PARAM_PMF_QOS",
        ArpAcOverride = 35 => "WMI_TLV_PDEV_PARAM_ARP_AC_OVERRIDE",
        Dcs = 36 => "WMI_TLV_PDEV_PARAM_DCS",
        AniEnable = 37 => "WMI_TLV_PDEV_PARAM_ANI_ENABLE",
        AniPollPeriod = 38 => "WMI_TLV_PDEV_PARAM_ANI_POLL_PERIOD",
        AniListenPeriod = 39 => "WMI_TLV_PDEV_PARAM_ANI_LISTEN_PERIOD",
        AniOfdmLevel = 40 => "WMI_TLV_PDEV_PARAM_ANI_OFDM_LEVEL",
        AniCckLevel = 41 => "WMI_TLV_PDEV_PARAM_ANI_CCK_LEVEL",
        Dyntxchain = 42 => "WMI_TLV_PDEV_PARAM_DYNTXCHAIN",
        ProxySta = 43 => "WMI_TLV_PDEV_PARAM_PROXY_STA",
        IdlePsConfig = 44 => "WMI_TLV_PDEV_PARAM_IDLE_PS_CONFIG",
        PowerGatingSleep = 45 => "WMI_TLV_PDEV_PARAM_POWER_GATING_SLEEP",
        RfkillEnable = 46 => "WMI_TLV_PDEV_PARAM_RFKILL_ENABLE",
        BurstDur = 47 => "WMI_TLV_PDEV_PARAM_BURST_DUR",
        BurstEnable = 48 => "WMI_TLV_PDEV_PARAM_BURST_ENABLE",
        HwRfkillConfig = 49 => "WMI_TLV_PDEV_PARAM_HW_RFKILL_CONFIG",
        LowPowerRfEnable = 50 => "WMI_TLV_PDEV_PARAM_LOW_POWER_RF_ENABLE",
        L1ssTrack = 51 => "WMI_TLV_PDEV_PARAM_L1SS_TRACK",
        HystEn = 52 => "WMI_TLV_PDEV_PARAM_HYST_EN",
        PowerCollapseEnable = 53 => "WMI_TLV_PDEV_PARAM_POWER_COLLAPSE_ENABLE",
        LedSysState = 54 => "WMI_TLV_PDEV_PARAM_LED_SYS_STATE",
        LedEnable = 55 => "WMI_TLV_PDEV_PARAM_LED_ENABLE",
        AudioOverWlanLatency = 56 => "WMI_TLV_PDEV_PARAM_AUDIO_OVER_WLAN_LATENCY",
        AudioOverWlanEnable = 57 => "WMI_TLV_PDEV_PARAM_AUDIO_OVER_WLAN_ENABLE",
        WhalMibStatsUpdateEnable = 58 => "WMI_TLV_PDEV_PARAM_WHAL_MIB_STATS_UPDATE_ENABLE",
        VdevRateStatsUpdatePeriod = 59 => "WMI_TLV_PDEV_PARAM_VDEV_RATE_STATS_UPDATE_PERIOD",
        TxpowerReasonNone = 60 => "WMI_TLV_PDEV_PARAM_TXPOWER_REASON_NONE",
        TxpowerReasonSar = 61 => "WMI_TLV_PDEV_PARAM_TXPOWER_REASON_SAR",
        TxpowerReasonMax = 62 => "WMI_TLV_PDEV_PARAM_TXPOWER_REASON_MAX",
    }
}

id_registry! {
    /// vdev parameter ids (`vdev-set-param`).
    pub enum VdevParam(u32) {
        RtsThreshold = 1 => "WMI_TLV_VDEV_PARAM_RTS_THRESHOLD",
        FragmentationThreshold = 2 => "WMI_TLV_VDEV_PARAM_FRAGMENTATION_THRESHOLD",
        BeaconInterval = 3 => "WMI_TLV_VDEV_PARAM_BEACON_INTERVAL",
        ListenInterval = 4 => "WMI_TLV_VDEV_PARAM_LISTEN_INTERVAL",
        MulticastRate = 5 => "WMI_TLV_VDEV_PARAM_MULTICAST_RATE",
        MgmtTxRate = 6 => "WMI_TLV_VDEV_PARAM_MGMT_TX_RATE",
        SlotTime = 7 => "WMI_TLV_VDEV_PARAM_SLOT_TIME",
        Preamble = 8 => "WMI_TLV_VDEV_PARAM_PREAMBLE",
        SwbaTime = 9 => "WMI_TLV_VDEV_PARAM_SWBA_TIME",
        StatsUpdatePeriod = 10 => "WMI_TLV_VDEV_STATS_UPDATE_PERIOD",
        PwrsaveAgeoutTime = 11 => "WMI_TLV_VDEV_PWRSAVE_AGEOUT_TIME",
        HostSwbaInterval = 12 => "WMI_TLV_VDEV_HOST_SWBA_INTERVAL",
        DtimPeriod = 13 => "WMI_TLV_VDEV_PARAM_DTIM_PERIOD",
        OcSchedulerAirTimeLimit = 14 => "WMI_TLV_VDEV_OC_SCHEDULER_AIR_TIME_LIMIT",
        Wds = 15 => "WMI_TLV_VDEV_PARAM_WDS",
        AtimWindow = 16 => "WMI_TLV_VDEV_PARAM_ATIM_WINDOW",
        BmissCountMax = 17 => "WMI_TLV_VDEV_PARAM_BMISS_COUNT_MAX",
        BmissFirstBcnt = 18 => "WMI_TLV_VDEV_PARAM_BMISS_FIRST_BCNT",
        BmissFinalBcnt = 19 => "WMI_TLV_VDEV_PARAM_BMISS_FINAL_BCNT",
        FeatureWmm = 20 => "WMI_TLV_VDEV_PARAM_FEATURE_WMM",
        Chwidth = 21 => "WMI_TLV_VDEV_PARAM_CHWIDTH",
        Chextoffset = 22 => "WMI_TLV_VDEV_PARAM_CHEXTOFFSET",
        DisableHtprotection = 23 => "WMI_TLV_VDEV_PARAM_DISABLE_HTPROTECTION",
        StaQuickkickout = 24 => "WMI_TLV_VDEV_PARAM_STA_QUICKKICKOUT",
        MgmtRate = 25 => "WMI_TLV_VDEV_PARAM_MGMT_RATE",
        ProtectionMode = 26 => "WMI_TLV_VDEV_PARAM_PROTECTION_MODE",
        FixedRate = 27 => "WMI_TLV_VDEV_PARAM_FIXED_RATE",
        Sgi = 28 => "WMI_TLV_VDEV_PARAM_SGI",
        Ldpc = 29 => "WMI_TLV_VDEV_PARAM_LDPC",
        TxStbc = 30 => "WMI_TLV_VDEV_PARAM_TX_STBC",
        RxStbc = 31 => "WMI_TLV_VDEV_PARAM_RX_STBC",
        IntraBssFwd = 32 => "WMI_TLV_VDEV_PARAM_INTRA_BSS_FWD",
        DefKeyid = 33 => "WMI_TLV_VDEV_PARAM_DEF_KEYID",
        Nss = 34 => "WMI_TLV_VDEV_PARAM_NSS",
        BcastDataRate = 35 => "WMI_TLV_VDEV_PARAM_BCAST_DATA_RATE",
        McastDataRate = 36 => "WMI_TLV_VDEV_PARAM_MCAST_DATA_RATE",
        McastIndicate = 37 => "WMI_TLV_VDEV_PARAM_MCAST_INDICATE",
        DhcpIndicate = 38 => "WMI_TLV_VDEV_PARAM_DHCP_INDICATE",
        UnknownDestIndicate = 39 => "WMI_TLV_VDEV_PARAM_UNKNOWN_DEST_INDICATE",
        ApKeepaliveMinIdleInactiveTimeSecs = 40 => "WMI_TLV_VDEV_PARAM_AP_KEEPALIVE_MIN_IDLE_INACTIVE_TIME_SECS",
        ApKeepaliveMaxIdleInactiveTimeSecs = 41 => "WMI_TLV_VDEV_PARAM_AP_KEEPALIVE_MAX_IDLE_INACTIVE_TIME_SECS",
        ApKeepaliveMaxUnresponsiveTimeSecs = 42 => "WMI_TLV_VDEV_PARAM_AP_KEEPALIVE_MAX_UNRESPONSIVE_TIME_SECS",
        ApEnableNawds = 43 => "WMI_TLV_VDEV_PARAM_AP_ENABLE_NAWDS",
        EnableRtscts = 44 => "WMI_TLV_VDEV_PARAM_ENABLE_RTSCTS",
        Txbf = 45 => "WMI_TLV_VDEV_PARAM_TXBF",
        PacketPowersave = 46 => "WMI_TLV_VDEV_PARAM_PACKET_POWERSAVE",
        DropUnencry = 47 => "WMI_TLV_VDEV_PARAM_DROP_UNENCRY",
        TxEncapType = 48 => "WMI_TLV_VDEV_PARAM_TX_ENCAP_TYPE",
        ApDetectOutOfSyncSleepingStaTimeSecs = 49 => "WMI_TLV_VDEV_PARAM_AP_DETECT_OUT_OF_SYNC_SLEEPING_STA_TIME_SECS",
        EarlyRxAdjustEnable = 50 => "WMI_TLV_VDEV_PARAM_EARLY_RX_ADJUST_ENABLE",
        EarlyRxTgtBmissNum = 51 => "WMI_TLV_VDEV_PARAM_EARLY_RX_TGT_BMISS_NUM",
        EarlyRxBmissSampleCycle = 52 => "WMI_TLV_VDEV_PARAM_EARLY_RX_BMISS_SAMPLE_CYCLE",
        EarlyRxSlopStep = 53 => "WMI_TLV_VDEV_PARAM_EARLY_RX_SLOP_STEP",
        EarlyRxInitSlop = 54 => "WMI_TLV_VDEV_PARAM_EARLY_RX_INIT_SLOP",
        EarlyRxAdjustPause = 55 => "WMI_TLV_VDEV_PARAM_EARLY_RX_ADJUST_PAUSE",
        TxPwrlimit = 56 => "WMI_TLV_VDEV_PARAM_TX_PWRLIMIT",
        SnrNumForCal = 57 => "WMI_TLV_VDEV_PARAM_SNR_NUM_FOR_CAL",
        RoamFwOffload = 58 => "WMI_TLV_VDEV_PARAM_ROAM_FW_OFFLOAD",
        EnableRmc = 59 => "WMI_TLV_VDEV_PARAM_ENABLE_RMC",
        IbssMaxBcnLostMs = 60 => "WMI_TLV_VDEV_PARAM_IBSS_MAX_BCN_LOST_MS",
        MaxRate = 61 => "WMI_TLV_VDEV_PARAM_MAX_RATE",
        EarlyRxDriftSample = 62 => "WMI_TLV_VDEV_PARAM_EARLY_RX_DRIFT_SAMPLE",
        SetIbssTxFailCntThr = 63 => "WMI_TLV_VDEV_PARAM_SET_IBSS_TX_FAIL_CNT_THR",
        EbtResyncTimeout = 64 => "WMI_TLV_VDEV_PARAM_EBT_RESYNC_TIMEOUT",
        AggrTrigEventEnable = 65 => "WMI_TLV_VDEV_PARAM_AGGR_TRIG_EVENT_ENABLE",
        IsIbssPowerSaveAllowed = 66 => "WMI_TLV_VDEV_PARAM_IS_IBSS_POWER_SAVE_ALLOWED",
        IsPowerCollapseAllowed = 67 => "WMI_TLV_VDEV_PARAM_IS_POWER_COLLAPSE_ALLOWED",
        IsAwakeOnTxrxEnabled = 68 => "WMI_TLV_VDEV_PARAM_IS_AWAKE_ON_TXRX_ENABLED",
        InactivityCnt = 69 => "WMI_TLV_VDEV_PARAM_INACTIVITY_CNT",
        TxspEndInactivityTimeMs = 70 => "WMI_TLV_VDEV_PARAM_TXSP_END_INACTIVITY_TIME_MS",
        DtimPolicy = 71 => "WMI_TLV_VDEV_PARAM_DTIM_POLICY",
        IbssPsWarmupTimeSecs = 72 => "WMI_TLV_VDEV_PARAM_IBSS_PS_WARMUP_TIME_SECS",
        IbssPs1rxChainInAtimWindowEnable = 73 => "WMI_TLV_VDEV_PARAM_IBSS_PS_1RX_CHAIN_IN_ATIM_WINDOW_ENABLE",
    }
}

id_registry! {
    /// peer parameter ids (`peer-set-param`).
    pub enum PeerParam(u32) {
        SmpsState = 0x1 => "WMI_PEER_SMPS_STATE",
        Ampdu = 0x2 => "WMI_PEER_AMPDU",
        Authorize = 0x3 => "WMI_PEER_AUTHORIZE",
        ChanWidth = 0x4 => "WMI_PEER_CHAN_WIDTH",
        Nss = 0x5 => "WMI_PEER_NSS",
        Use4addr = 0x6 => "WMI_PEER_USE_4ADDR",
        DummyVar = 0xFF => "WMI_PEER_DUMMY_VAR",
    }
}

id_registry! {
    /// peer types (`peer-create`).
    pub enum PeerType(u32) {
        Default = 0 => "WMI_TLV_PEER_TYPE_DEFAULT",
        Bss = 1 => "WMI_TLV_PEER_TYPE_BSS",
        Tdls = 2 => "WMI_TLV_PEER_TYPE_TDLS",
        HostMax = 127 => "WMI_TLV_PEER_TYPE_HOST_MAX",
        RoamoffloadTmp = 128 => "WMI_TLV_PEER_TYPE_ROAMOFFLOAD_TMP",
    }
}

fn le16(data: &[u8], offset: usize) -> Option<u16> {
    let bytes = data.get(offset..offset + 2)?;
    Some(u16::from_le_bytes([bytes[0], bytes[1]]))
}

fn le32(data: &[u8], offset: usize) -> Option<u32> {
    let bytes = data.get(offset..offset + 4)?;
    Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

fn byte(data: &[u8], offset: usize) -> Option<u8> {
    data.get(offset).copied()
}

fn array<const N: usize>(data: &[u8], offset: usize) -> Option<[u8; N]> {
    data.get(offset..offset + N)?.try_into().ok()
}

/// TLV preamble: declared length + tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TlvHeader {
    pub length: u16,
    pub tag: TlvTag,
}

impl TlvHeader {
    /// Decode the 4-byte preamble at the start of `data`.
    pub fn parse(data: &[u8]) -> Option<Self> {
        Some(Self {
            length: le16(data, 0)?,
            tag: TlvTag::from_id(le16(data, 2)?),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdevSetParamMsg {
    pub tlv_hdr: TlvHeader,
    pub param: PdevParam,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdevSetRegdomainMsg {
    pub tlv_hdr: TlvHeader,
    pub pdev_id: u32,
    pub regd: u32,
    pub regd_2ghz: u32,
    pub regd_5ghz: u32,
    pub conform_limit_2ghz: u32,
    pub conform_limit_5ghz: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VdevCreateMsg {
    pub tlv_hdr: TlvHeader,
    pub vdev_id: u32,
    pub vdev_type: u32,
    pub vdev_subtype: u32,
    /// Raw MAC address field as dumped: 6 octets plus 2 bytes of padding.
    pub mac_addr: [u8; 8],
}

/// Channel descriptor nested inside `vdev-start-request`.
///
/// Bytes 13..16 of the structure belong to wire-format bit unions and are
/// not decoded; the per-byte power fields start at 16.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WmiChannel {
    pub tlv_hdr: TlvHeader,
    pub mhz: u32,
    pub band_center_freq1: u32,
    pub band_center_freq2: u32,
    pub mode: u8,
    pub min_power: u8,
    pub max_power: u8,
    pub reg_power: u8,
    pub reg_classid: u8,
    pub antenna_max: u8,
    pub max_tx_power: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VdevStartReqMsg {
    pub tlv_hdr: TlvHeader,
    pub vdev_id: u32,
    pub requestor_id: u32,
    pub bcn_intval: u32,
    pub dtim_period: u32,
    pub flags: u32,
    pub ssid_len: u32,
    pub ssid: [u8; 32],
    pub bcn_tx_rate: u32,
    pub bcn_tx_power: u32,
    pub num_noa_descr: u32,
    pub disable_hw_ack: u32,
    /// Present only when the nested channel TLV fits inside the payload.
    pub chan: Option<WmiChannel>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VdevSetParamMsg {
    pub tlv_hdr: TlvHeader,
    pub vdev_id: u32,
    pub param: VdevParam,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerCreateMsg {
    pub tlv_hdr: TlvHeader,
    pub vdev_id: u32,
    /// Raw MAC address field as dumped: 6 octets plus 2 bytes of padding.
    pub peer_addr: [u8; 8],
    pub peer_type: PeerType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerSetParamMsg {
    pub tlv_hdr: TlvHeader,
    pub vdev_id: u32,
    pub peer_addr: [u8; 8],
    pub param: PeerParam,
    pub value: u32,
}

/// Structured view of one decoded TLV command payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TlvMsg {
    PdevSetParam(PdevSetParamMsg),
    PdevSetRegdomain(PdevSetRegdomainMsg),
    VdevCreate(VdevCreateMsg),
    VdevStartReq(VdevStartReqMsg),
    VdevSetParam(VdevSetParamMsg),
    PeerCreate(PeerCreateMsg),
    PeerSetParam(PeerSetParamMsg),
}

impl TlvMsg {
    /// Decode the payload of a completed message.
    ///
    /// `data` is the WMI payload after the WMI header. Returns `None` when
    /// the command is outside the decoded set, the declared TLV length is
    /// below the structure minimum, or the payload is too short for the
    /// fixed-offset fields.
    pub fn decode(cmd: WmiCmd, data: &[u8]) -> Option<Self> {
        match cmd {
            WmiCmd::PdevSetParam => pdev_set_param(data).map(Self::PdevSetParam),
            WmiCmd::PdevSetRegdomain => pdev_set_regdomain(data).map(Self::PdevSetRegdomain),
            WmiCmd::VdevCreate => vdev_create(data).map(Self::VdevCreate),
            WmiCmd::VdevStartRequest => vdev_start_req(data).map(Self::VdevStartReq),
            WmiCmd::VdevSetParam => vdev_set_param(data).map(Self::VdevSetParam),
            WmiCmd::PeerCreate => peer_create(data).map(Self::PeerCreate),
            WmiCmd::PeerSetParam => peer_set_param(data).map(Self::PeerSetParam),
            _ => None,
        }
    }
}

fn pdev_set_param(data: &[u8]) -> Option<PdevSetParamMsg> {
    let tlv_hdr = TlvHeader::parse(data)?;
    if tlv_hdr.length < 12 {
        return None;
    }
    Some(PdevSetParamMsg {
        tlv_hdr,
        param: PdevParam::from_id(le32(data, 8)?),
        value: le32(data, 12)?,
    })
}

fn pdev_set_regdomain(data: &[u8]) -> Option<PdevSetRegdomainMsg> {
    let tlv_hdr = TlvHeader::parse(data)?;
    if tlv_hdr.length < 24 {
        return None;
    }
    Some(PdevSetRegdomainMsg {
        tlv_hdr,
        pdev_id: le32(data, 4)?,
        regd: le32(data, 8)?,
        regd_2ghz: le32(data, 12)?,
        regd_5ghz: le32(data, 16)?,
        conform_limit_2ghz: le32(data, 20)?,
        conform_limit_5ghz: le32(data, 24)?,
    })
}

fn vdev_create(data: &[u8]) -> Option<VdevCreateMsg> {
    let tlv_hdr = TlvHeader::parse(data)?;
    if tlv_hdr.length < 20 {
        return None;
    }
    Some(VdevCreateMsg {
        tlv_hdr,
        vdev_id: le32(data, 4)?,
        vdev_type: le32(data, 8)?,
        vdev_subtype: le32(data, 12)?,
        mac_addr: array(data, 16)?,
    })
}

fn wmi_channel(tlv_hdr: TlvHeader, data: &[u8]) -> Option<WmiChannel> {
    Some(WmiChannel {
        tlv_hdr,
        mhz: le32(data, 0)?,
        band_center_freq1: le32(data, 4)?,
        band_center_freq2: le32(data, 8)?,
        mode: byte(data, 12)?,
        min_power: byte(data, 16)?,
        max_power: byte(data, 17)?,
        reg_power: byte(data, 18)?,
        reg_classid: byte(data, 19)?,
        antenna_max: byte(data, 20)?,
        max_tx_power: byte(data, 21)?,
    })
}

fn vdev_start_req(data: &[u8]) -> Option<VdevStartReqMsg> {
    let tlv_hdr = TlvHeader::parse(data)?;
    if tlv_hdr.length < 72 {
        return None;
    }

    // The channel TLV follows the primary structure's declared length. It is
    // decoded only when every one of its fields lies inside the payload.
    let next_tlv_offset = usize::from(tlv_hdr.length) + 4;
    let chan = data.get(next_tlv_offset..).and_then(|nested| {
        let hdr2 = TlvHeader::parse(nested)?;
        wmi_channel(hdr2, nested.get(4..)?)
    });

    Some(VdevStartReqMsg {
        tlv_hdr,
        vdev_id: le32(data, 4)?,
        requestor_id: le32(data, 8)?,
        bcn_intval: le32(data, 12)?,
        dtim_period: le32(data, 16)?,
        flags: le32(data, 20)?,
        ssid_len: le32(data, 24)?,
        ssid: array(data, 28)?,
        bcn_tx_rate: le32(data, 60)?,
        bcn_tx_power: le32(data, 64)?,
        num_noa_descr: le32(data, 68)?,
        disable_hw_ack: le32(data, 72)?,
        chan,
    })
}

fn vdev_set_param(data: &[u8]) -> Option<VdevSetParamMsg> {
    let tlv_hdr = TlvHeader::parse(data)?;
    if tlv_hdr.length < 12 {
        return None;
    }
    Some(VdevSetParamMsg {
        tlv_hdr,
        vdev_id: le32(data, 4)?,
        param: VdevParam::from_id(le32(data, 8)?),
        value: le32(data, 12)?,
    })
}

fn peer_create(data: &[u8]) -> Option<PeerCreateMsg> {
    let tlv_hdr = TlvHeader::parse(data)?;
    if tlv_hdr.length < 16 {
        return None;
    }
    Some(PeerCreateMsg {
        tlv_hdr,
        vdev_id: le32(data, 4)?,
        peer_addr: array(data, 8)?,
        peer_type: PeerType::from_id(le32(data, 16)?),
    })
}

fn peer_set_param(data: &[u8]) -> Option<PeerSetParamMsg> {
    let tlv_hdr = TlvHeader::parse(data)?;
    if tlv_hdr.length < 20 {
        return None;
    }
    Some(PeerSetParamMsg {
        tlv_hdr,
        vdev_id: le32(data, 4)?,
        peer_addr: array(data, 8)?,
        param: PeerParam::from_id(le32(data, 16)?),
        value: le32(data, 20)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push16(buf: &mut Vec<u8>, value: u16) {
        buf.extend_from_slice(&value.to_le_bytes());
    }

    fn push32(buf: &mut Vec<u8>, value: u32) {
        buf.extend_from_slice(&value.to_le_bytes());
    }

    #[test]
    fn tag_registry_is_total() {
        assert_eq!(TlvTag::from_id(82), TlvTag::StructPdevSetParamCmd);
        assert_eq!(
            TlvTag::from_id(82).name(),
            Some("WMI_TLV_TAG_STRUCT_PDEV_SET_PARAM_CMD")
        );
        assert_eq!(TlvTag::from_id(9999), TlvTag::Unknown(9999));
    }

    #[test]
    fn pdev_set_param_decodes() {
        let mut data = Vec::new();
        push16(&mut data, 12); // tlv length
        push16(&mut data, 82); // struct pdev_set_param_cmd
        push32(&mut data, 0); // reserved
        push32(&mut data, 1); // param: tx chain mask
        push32(&mut data, 0x3);

        let msg = TlvMsg::decode(WmiCmd::PdevSetParam, &data).unwrap();
        match msg {
            TlvMsg::PdevSetParam(msg) => {
                assert_eq!(msg.tlv_hdr.tag, TlvTag::StructPdevSetParamCmd);
                assert_eq!(msg.param, PdevParam::TxChainMask);
                assert_eq!(msg.value, 0x3);
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn pdev_set_param_declared_length_below_minimum() {
        let mut data = Vec::new();
        push16(&mut data, 8); // below the 12-byte structure minimum
        push16(&mut data, 82);
        push32(&mut data, 0);
        push32(&mut data, 1);
        push32(&mut data, 0x3);
        assert_eq!(TlvMsg::decode(WmiCmd::PdevSetParam, &data), None);
    }

    #[test]
    fn truncated_payload_fails_decode() {
        let mut data = Vec::new();
        push16(&mut data, 12);
        push16(&mut data, 82);
        push32(&mut data, 0);
        // param/value fields missing entirely
        assert_eq!(TlvMsg::decode(WmiCmd::PdevSetParam, &data), None);
    }

    #[test]
    fn commands_outside_the_set_are_not_decoded(){
        assert_eq!(TlvMsg::decode(WmiCmd::Init, &[0u8; 64]), None);
        assert_eq!(TlvMsg::decode(WmiCmd::Unknown(0x123456), &[0u8; 64]), None);
    }

    #[test]
    fn vdev_create_keeps_raw_mac_field() {
        let mut data = Vec::new();
        push16(&mut data, 20);
        push16(&mut data, 86); // struct vdev_create_cmd
        push32(&mut data, 1); // vdev id
        push32(&mut data, 1); // type
        push32(&mut data, 0); // subtype
        data.extend_from_slice(&[0x00, 0x03, 0x7f, 0x11, 0x22, 0x33, 0x00, 0x00]);

        let msg = TlvMsg::decode(WmiCmd::VdevCreate, &data).unwrap();
        match msg {
            TlvMsg::VdevCreate(msg) => {
                assert_eq!(msg.vdev_id, 1);
                assert_eq!(msg.mac_addr, [0x00, 0x03, 0x7f, 0x11, 0x22, 0x33, 0x00, 0x00]);
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn vdev_set_param_unknown_param_is_total() {
        let mut data = Vec::new();
        push16(&mut data, 12);
        push16(&mut data, 95); // struct vdev_set_param_cmd
        push32(&mut data, 0);
        push32(&mut data, 0x4000); // no such vdev param
        push32(&mut data, 7);

        match TlvMsg::decode(WmiCmd::VdevSetParam, &data).unwrap() {
            TlvMsg::VdevSetParam(msg) => {
                assert_eq!(msg.param, VdevParam::Unknown(0x4000));
                assert_eq!(msg.param.name(), None);
                assert_eq!(msg.value, 7);
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    fn vdev_start_req_payload() -> Vec<u8> {
        let mut data = Vec::new();
        push16(&mut data, 72);
        push16(&mut data, 88); // struct vdev_start_request_cmd
        push32(&mut data, 2); // vdev id
        push32(&mut data, 0); // requestor
        push32(&mut data, 100); // bcn interval
        push32(&mut data, 2); // dtim
        push32(&mut data, 0); // flags
        push32(&mut data, 4); // ssid len
        data.extend_from_slice(b"test");
        data.extend_from_slice(&[0u8; 28]); // rest of the 32-byte ssid field
        push32(&mut data, 0); // bcn tx rate
        push32(&mut data, 0); // bcn tx power
        push32(&mut data, 0); // noa descriptors
        push32(&mut data, 0); // disable hw ack
        data
    }

    #[test]
    fn vdev_start_req_without_channel() {
        let data = vdev_start_req_payload();
        match TlvMsg::decode(WmiCmd::VdevStartRequest, &data).unwrap() {
            TlvMsg::VdevStartReq(msg) => {
                assert_eq!(msg.vdev_id, 2);
                assert_eq!(msg.ssid_len, 4);
                assert_eq!(&msg.ssid[..4], b"test");
                assert_eq!(msg.chan, None);
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn vdev_start_req_with_nested_channel() {
        let mut data = vdev_start_req_payload();
        // Nested channel TLV right after the primary structure.
        push16(&mut data, 24);
        push16(&mut data, 80); // struct channel
        push32(&mut data, 2412); // mhz
        push32(&mut data, 2412);
        push32(&mut data, 0);
        data.extend_from_slice(&[0x02, 0x00, 0x00, 0x00]); // mode + union bytes
        data.extend_from_slice(&[0x00, 0x14, 0x14, 0x00, 0x02, 0x14]);

        match TlvMsg::decode(WmiCmd::VdevStartRequest, &data).unwrap() {
            TlvMsg::VdevStartReq(msg) => {
                let chan = msg.chan.expect("channel should decode");
                assert_eq!(chan.tlv_hdr.tag, TlvTag::StructChannel);
                assert_eq!(chan.mhz, 2412);
                assert_eq!(chan.mode, 2);
                assert_eq!(chan.max_power, 0x14);
                assert_eq!(chan.max_tx_power, 0x14);
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn vdev_start_req_partial_channel_is_skipped() {
        let mut data = vdev_start_req_payload();
        push16(&mut data, 24);
        push16(&mut data, 80);
        push32(&mut data, 2412); // channel truncated after mhz
        match TlvMsg::decode(WmiCmd::VdevStartRequest, &data).unwrap() {
            TlvMsg::VdevStartReq(msg) => assert_eq!(msg.chan, None),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn peer_create_resolves_peer_type() {
        let mut data = Vec::new();
        push16(&mut data, 16);
        push16(&mut data, 97); // struct peer_create_cmd
        push32(&mut data, 0);
        data.extend_from_slice(&[0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff, 0x00, 0x00]);
        push32(&mut data, 1); // bss peer

        match TlvMsg::decode(WmiCmd::PeerCreate, &data).unwrap() {
            TlvMsg::PeerCreate(msg) => {
                assert_eq!(msg.peer_type, PeerType::Bss);
                assert_eq!(msg.peer_addr[..6], [0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]);
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn peer_set_param_decodes() {
        let mut data = Vec::new();
        push16(&mut data, 20);
        push16(&mut data, 100); // struct peer_set_param_cmd
        push32(&mut data, 3);
        data.extend_from_slice(&[0u8; 8]);
        push32(&mut data, 0x3); // authorize
        push32(&mut data, 1);

        match TlvMsg::decode(WmiCmd::PeerSetParam, &data).unwrap() {
            TlvMsg::PeerSetParam(msg) => {
                assert_eq!(msg.vdev_id, 3);
                assert_eq!(msg.param, PeerParam::Authorize);
                assert_eq!(msg.value, 1);
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn pdev_set_regdomain_decodes() {
        let mut data = Vec::new();
        push16(&mut data, 24);
        push16(&mut data, 81); // struct pdev_set_regdomain_cmd
        push32(&mut data, 0);
        push32(&mut data, 0x37);
        push32(&mut data, 0x37);
        push32(&mut data, 0x37);
        push32(&mut data, 0x20);
        push32(&mut data, 0x20);

        match TlvMsg::decode(WmiCmd::PdevSetRegdomain, &data).unwrap() {
            TlvMsg::PdevSetRegdomain(msg) => {
                assert_eq!(msg.regd, 0x37);
                assert_eq!(msg.conform_limit_5ghz, 0x20);
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
